pub mod analysis_result;
pub mod card;
pub mod footer;
pub mod header;
pub mod icon;
pub mod profile_form;
pub mod recommendations;
pub mod select_field;
pub mod settings_form;
pub mod upload_form;
