use leptos::prelude::*;

use crate::content::SelectOptions;
use crate::theme;

/// Labelled native `<select>`.
///
/// With no `selected` value the disabled placeholder option is shown first.
/// The choice is left to the browser; nothing reads it back.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: SelectOptions,
    #[prop(optional)] selected: Option<&'static str>,
    #[prop(default = theme::FIELD_LABEL)] label_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class=label_class>{label}</label>
            <select id=id class={theme::INPUT}>
                <option value="" disabled=true selected={selected.is_none()} hidden=true>
                    {placeholder}
                </option>
                {options
                    .iter()
                    .map(|(value, text)| {
                        view! {
                            <option value={*value} selected={selected == Some(*value)}>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
