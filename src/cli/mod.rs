mod commands;
mod handlers;

pub use commands::{
    AddCommand, AddEntity, Cli, Commands, SeoAction, SeoCommand, SettingsAction, SettingsCommand,
    UpdateCommand, UpdateEntity,
};
pub use handlers::{
    handle_add_article, handle_add_project, handle_add_service, handle_add_testimonial,
    handle_dashboard, handle_delete, handle_get, handle_init, handle_lang, handle_list,
    handle_login, handle_logout, handle_seo_set, handle_seo_show, handle_settings_set,
    handle_settings_show, handle_update_article, handle_update_project, handle_update_service,
    handle_update_testimonial,
};
