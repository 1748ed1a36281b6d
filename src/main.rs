use clap::Parser;

use archstudio::cli::{
    handle_add_article, handle_add_project, handle_add_service, handle_add_testimonial,
    handle_dashboard, handle_delete, handle_get, handle_init, handle_lang, handle_list,
    handle_login, handle_logout, handle_seo_set, handle_seo_show, handle_settings_set,
    handle_settings_show, handle_update_article, handle_update_project, handle_update_service,
    handle_update_testimonial, AddEntity, Cli, Commands, SeoAction, SettingsAction, UpdateEntity,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Login { username } => handle_login(username),
        Commands::Logout => handle_logout(),
        Commands::Lang { lang } => handle_lang(lang),
        Commands::Dashboard { json } => handle_dashboard(json),
        Commands::Add(add) => match add.entity {
            AddEntity::Project(args) => handle_add_project(args),
            AddEntity::Article(args) => handle_add_article(args),
            AddEntity::Service(args) => handle_add_service(args),
            AddEntity::Testimonial(args) => handle_add_testimonial(args),
        },
        Commands::Update(update) => match update.entity {
            UpdateEntity::Project(args) => handle_update_project(args),
            UpdateEntity::Article(args) => handle_update_article(args),
            UpdateEntity::Service(args) => handle_update_service(args),
            UpdateEntity::Testimonial(args) => handle_update_testimonial(args),
        },
        Commands::List { kind, json } => handle_list(kind, json),
        Commands::Get { kind, id, json } => handle_get(kind, id, json),
        Commands::Delete { kind, id, force } => handle_delete(kind, id, force),
        Commands::Settings(settings) => match settings.action {
            SettingsAction::Set(args) => handle_settings_set(args),
            SettingsAction::Show { json } => handle_settings_show(json),
        },
        Commands::Seo(seo) => match seo.action {
            SeoAction::Set(args) => handle_seo_set(args),
            SeoAction::Show { json } => handle_seo_show(json),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
