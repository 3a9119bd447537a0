use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::icon::{Icon, IconKind};
use crate::theme;

/// Drop area placeholder. The file input has no change handler, so a chosen
/// file is never read.
#[component]
pub fn UploadForm() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Upload Product Image"</CardTitle>
                <CardDescription>
                    "Take a photo or upload an image of the product for instant analysis"
                </CardDescription>
            </CardHeader>
            <CardContent>
                <div class="grid w-full max-w-sm items-center gap-1.5">
                    <label for="file-upload" class={theme::FIELD_LABEL}>"Product Image"</label>
                    <div class="mt-2 flex justify-center rounded-lg border border-dashed border-gray-900/25 px-6 py-10">
                        <div class="text-center">
                            <Icon kind=IconKind::Upload class="mx-auto h-12 w-12 text-gray-300" />
                            <div class="mt-4 flex text-sm leading-6 text-gray-600">
                                <label
                                    for="file-upload"
                                    class="relative cursor-pointer rounded-md bg-white font-semibold text-green-600 \
                                           focus-within:outline-none focus-within:ring-2 focus-within:ring-green-600 \
                                           focus-within:ring-offset-2 hover:text-green-500"
                                >
                                    <span>"Upload a file"</span>
                                    <input id="file-upload" name="file-upload" type="file" class="sr-only" />
                                </label>
                                <p class="pl-1">"or drag and drop"</p>
                            </div>
                            <p class="text-xs leading-5 text-gray-600">"PNG, JPG, GIF up to 10MB"</p>
                        </div>
                    </div>
                </div>
            </CardContent>
            <CardFooter>
                <button type="button" class={theme::PRIMARY_BUTTON_FULL}>
                    "Analyze Product"
                </button>
            </CardFooter>
        </Card>
    }
}
