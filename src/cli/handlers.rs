use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::commands::{
    AddArticleArgs, AddProjectArgs, AddServiceArgs, AddTestimonialArgs, SeoSetArgs,
    SettingsSetArgs, UpdateArticleArgs, UpdateProjectArgs, UpdateServiceArgs,
    UpdateTestimonialArgs,
};
use crate::entity::{
    AdminSession, Article, ContactInfo, HeroContent, Kind, Project, Record, SeoSettings, Service,
    SiteSettings, SiteStats, Slot, SocialLinks, Testimonial,
};
use crate::error::{Result, StoreError, ValidationError};
use crate::locale::Lang;
use crate::storage::ContentStore;

/// Find the workspace root by looking for .archstudio/ or .git/
fn find_workspace_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".archstudio").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

/// One admin command's view of the workspace: the open store, a checked
/// login, and the active display language. Every admin operation runs
/// through this controller, so nothing reaches into storage on its own.
struct AdminPanel {
    store: ContentStore,
    lang: Lang,
}

impl AdminPanel {
    /// Open the workspace and require a logged-in session.
    fn open() -> Result<Self> {
        let store = ContentStore::open(&find_workspace_root())?;

        match store.session() {
            Some(session) if session.is_logged_in => {}
            _ => return Err(StoreError::NotLoggedIn),
        }

        let lang = store.language();
        Ok(Self { store, lang })
    }

    fn counts(&self) -> [(&'static str, usize); 4] {
        [
            (Kind::Projects.label(self.lang), self.store.count::<Project>()),
            (Kind::Articles.label(self.lang), self.store.count::<Article>()),
            (Kind::Services.label(self.lang), self.store.count::<Service>()),
            (
                Kind::Testimonials.label(self.lang),
                self.store.count::<Testimonial>(),
            ),
        ]
    }

    fn render_counts(&self) {
        let parts: Vec<String> = self
            .counts()
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect();
        println!("\n{}", parts.join(" | "));
    }

    fn render_projects(&self) {
        let projects = self.store.list::<Project>();
        println!("{}\n", Kind::Projects.title(self.lang));
        if projects.is_empty() {
            println!("No projects found.");
            return;
        }
        for p in &projects {
            let location = if p.location.is_empty() {
                String::new()
            } else {
                format!(" - {}", p.location)
            };
            println!(
                "  ({}) [{}|{}] {}{}",
                short_id(p.id),
                p.category,
                p.status,
                self.lang.pick(&p.title_en, &p.title_ar),
                location
            );
        }
    }

    fn render_articles(&self) {
        let articles = self.store.list::<Article>();
        println!("{}\n", Kind::Articles.title(self.lang));
        if articles.is_empty() {
            println!("No articles found.");
            return;
        }
        for a in &articles {
            let date_str = a.date.map(|d| format!(" {}", d)).unwrap_or_default();
            println!(
                "  ({}) [{}|{}]{} {}",
                short_id(a.id),
                a.category,
                a.status,
                date_str,
                self.lang.pick(&a.title_en, &a.title_ar)
            );
        }
    }

    fn render_services(&self) {
        let services = self.store.list::<Service>();
        println!("{}\n", Kind::Services.title(self.lang));
        if services.is_empty() {
            println!("No services found.");
            return;
        }
        for s in &services {
            let icon = if s.icon.is_empty() { "fas fa-cog" } else { &s.icon };
            println!(
                "  ({}) [{}] {}",
                short_id(s.id),
                icon,
                self.lang.pick(&s.title_en, &s.title_ar)
            );
        }
    }

    fn render_testimonials(&self) {
        let testimonials = self.store.list::<Testimonial>();
        println!("{}\n", Kind::Testimonials.title(self.lang));
        if testimonials.is_empty() {
            println!("No testimonials found.");
            return;
        }
        for t in &testimonials {
            let stars = t
                .stars()
                .map(|n| "★".repeat(n as usize))
                .unwrap_or_else(|| t.rating.clone());
            let position = self.lang.pick(&t.position_en, &t.position_ar);
            let position = if position.is_empty() {
                String::new()
            } else {
                format!(" - {}", position)
            };
            println!(
                "  ({}) [{}] {}{}",
                short_id(t.id),
                stars,
                self.lang.pick(&t.name_en, &t.name_ar),
                position
            );
        }
    }

    fn render_settings(&self) {
        match self.store.load_singleton::<SiteSettings>() {
            None => println!("No settings saved."),
            Some(settings) => {
                println!("{}\n", Slot::Settings.title(self.lang));
                if let Some(hero) = &settings.hero {
                    print_opt("hero.subtitleEn", &hero.subtitle_en);
                    print_opt("hero.subtitleAr", &hero.subtitle_ar);
                    print_opt("hero.titleEn", &hero.title_en);
                    print_opt("hero.titleAr", &hero.title_ar);
                    print_opt("hero.descEn", &hero.desc_en);
                    print_opt("hero.descAr", &hero.desc_ar);
                }
                if let Some(stats) = &settings.stats {
                    print_opt("stats.projects", &stats.projects);
                    print_opt("stats.years", &stats.years);
                    print_opt("stats.awards", &stats.awards);
                }
                if let Some(contact) = &settings.contact {
                    print_opt("contact.addressEn", &contact.address_en);
                    print_opt("contact.addressAr", &contact.address_ar);
                    print_opt("contact.phone", &contact.phone);
                    print_opt("contact.email", &contact.email);
                    print_opt("contact.hoursEn", &contact.hours_en);
                    print_opt("contact.hoursAr", &contact.hours_ar);
                }
                if let Some(social) = &settings.social {
                    print_opt("social.facebook", &social.facebook);
                    print_opt("social.instagram", &social.instagram);
                    print_opt("social.linkedin", &social.linkedin);
                    print_opt("social.twitter", &social.twitter);
                }
            }
        }
    }

    fn render_seo(&self) {
        match self.store.load_singleton::<SeoSettings>() {
            None => println!("No SEO settings saved."),
            Some(seo) => {
                println!("{}\n", Slot::Seo.title(self.lang));
                print_opt("title", &seo.title);
                print_opt("description", &seo.description);
                print_opt("keywords", &seo.keywords);
                print_opt("ogTitle", &seo.og_title);
                print_opt("ogDescription", &seo.og_description);
                print_opt("ogImage", &seo.og_image);
                print_opt("schemaType", &seo.schema_type);
                print_opt("serviceArea", &seo.service_area);
            }
        }
    }

    /// Ask before deleting unless --force was given. Interactive runs get a
    /// localized prompt; non-interactive runs must pass --force.
    fn confirm_delete(&self, label: &str, force: bool) -> Result<bool> {
        if force {
            return Ok(true);
        }

        if !atty::is(atty::Stream::Stdin) {
            return Err(StoreError::ForceRequired);
        }

        eprintln!(
            "{} ({}) [y/N] ",
            self.lang.pick(
                "Are you sure you want to delete this item?",
                "هل أنت متأكد من حذف هذا العنصر؟"
            ),
            label
        );

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }
}

fn short_id(id: Option<Uuid>) -> String {
    match id {
        Some(id) => id.to_string()[..7].to_string(),
        None => "-------".to_string(),
    }
}

fn print_opt(label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("  {}: {}", label, value);
    }
}

/// Find a record whose id starts with the given prefix. An empty prefix
/// would match anything, so it is rejected outright.
fn resolve<R: Record>(store: &ContentStore, id: &str) -> Result<(Uuid, R)> {
    if id.is_empty() {
        return Err(StoreError::NotFound {
            kind: R::KIND.singular(),
            id: id.to_string(),
        });
    }

    store
        .list::<R>()
        .into_iter()
        .find_map(|item| {
            let uuid = item.id()?;
            uuid.to_string().starts_with(id).then(|| (uuid, item))
        })
        .ok_or_else(|| StoreError::NotFound {
            kind: R::KIND.singular(),
            id: id.to_string(),
        })
}

fn parse_field<T>(field: &'static str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(|message: String| {
        let mut errors = ValidationError::new();
        errors.push(field, message);
        StoreError::Validation(errors)
    })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut errors = ValidationError::new();
        errors.push(field, format!("must be a date in YYYY-MM-DD format, got '{}'", value));
        StoreError::Validation(errors)
    })
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let store = ContentStore::init(&root)?;

    println!("Initialized arch-studio workspace in {}", store.dir().display());

    Ok(())
}

pub fn handle_login(username: String) -> Result<()> {
    let store = ContentStore::open(&find_workspace_root())?;

    store.save_session(&AdminSession::new(&username))?;

    println!("Logged in as {}.", username);

    Ok(())
}

pub fn handle_logout() -> Result<()> {
    let store = ContentStore::open(&find_workspace_root())?;

    store.clear_session()?;

    println!("Logged out.");

    Ok(())
}

pub fn handle_lang(lang: Option<String>) -> Result<()> {
    let store = ContentStore::open(&find_workspace_root())?;

    match lang {
        Some(value) => {
            let lang: Lang = parse_field("language", &value)?;
            store.set_language(lang)?;
            println!("Language set to {}.", lang);
        }
        None => println!("{}", store.language()),
    }

    Ok(())
}

pub fn handle_dashboard(json: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    if json {
        let value = serde_json::json!({
            "projects": panel.store.count::<Project>(),
            "articles": panel.store.count::<Article>(),
            "services": panel.store.count::<Service>(),
            "testimonials": panel.store.count::<Testimonial>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}\n", panel.lang.pick("Dashboard", "لوحة التحكم"));
        for (label, count) in panel.counts() {
            println!("  {}: {}", label, count);
        }
    }

    Ok(())
}

pub fn handle_add_project(args: AddProjectArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let project = Project {
        id: None,
        title_en: args.title,
        title_ar: args.title_ar.unwrap_or_default(),
        category: parse_field("category", &args.category)?,
        location: args.location.unwrap_or_default(),
        desc_en: args.desc_en.unwrap_or_default(),
        desc_ar: args.desc_ar.unwrap_or_default(),
        image: args.image.unwrap_or_default(),
        status: parse_field("status", &args.status)?,
        created_at: None,
    };

    let saved = panel.store.save(project)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Project saved successfully!\n");
        panel.render_projects();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_add_article(args: AddArticleArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let content = if args.stdin {
        read_stdin()?
    } else {
        args.content.unwrap_or_default()
    };

    let article = Article {
        id: None,
        title_en: args.title,
        title_ar: args.title_ar.unwrap_or_default(),
        category: parse_field("category", &args.category)?,
        date: args.date.map(|d| parse_date("date", &d)).transpose()?,
        excerpt_en: args.excerpt_en.unwrap_or_default(),
        excerpt_ar: args.excerpt_ar.unwrap_or_default(),
        content_en: content,
        image: args.image.unwrap_or_default(),
        status: parse_field("status", &args.status)?,
        created_at: None,
    };

    let saved = panel.store.save(article)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Article saved successfully!\n");
        panel.render_articles();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_add_service(args: AddServiceArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let service = Service {
        id: None,
        icon: args.icon.unwrap_or_default(),
        title_en: args.title,
        title_ar: args.title_ar.unwrap_or_default(),
        desc_en: args.desc_en.unwrap_or_default(),
        desc_ar: args.desc_ar.unwrap_or_default(),
    };

    let saved = panel.store.save(service)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Service saved successfully!\n");
        panel.render_services();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_add_testimonial(args: AddTestimonialArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let testimonial = Testimonial {
        id: None,
        name_en: args.name,
        name_ar: args.name_ar.unwrap_or_default(),
        position_en: args.position_en.unwrap_or_default(),
        position_ar: args.position_ar.unwrap_or_default(),
        quote_en: args.quote_en.unwrap_or_default(),
        quote_ar: args.quote_ar.unwrap_or_default(),
        rating: args.rating,
    };

    let saved = panel.store.save(testimonial)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Testimonial saved successfully!\n");
        panel.render_testimonials();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_update_project(args: UpdateProjectArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let (_, mut project) = resolve::<Project>(&panel.store, &args.id)?;

    if let Some(title_en) = args.title_en {
        project.title_en = title_en;
    }
    if let Some(title_ar) = args.title_ar {
        project.title_ar = title_ar;
    }
    if let Some(category) = args.category {
        project.category = parse_field("category", &category)?;
    }
    if let Some(location) = args.location {
        project.location = location;
    }
    if let Some(desc_en) = args.desc_en {
        project.desc_en = desc_en;
    }
    if let Some(desc_ar) = args.desc_ar {
        project.desc_ar = desc_ar;
    }
    if let Some(image) = args.image {
        project.image = image;
    }
    if let Some(status) = args.status {
        project.status = parse_field("status", &status)?;
    }

    let saved = panel.store.save(project)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Project saved successfully!\n");
        panel.render_projects();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_update_article(args: UpdateArticleArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let (_, mut article) = resolve::<Article>(&panel.store, &args.id)?;

    if let Some(title_en) = args.title_en {
        article.title_en = title_en;
    }
    if let Some(title_ar) = args.title_ar {
        article.title_ar = title_ar;
    }
    if let Some(category) = args.category {
        article.category = parse_field("category", &category)?;
    }
    if let Some(date) = args.date {
        article.date = Some(parse_date("date", &date)?);
    }
    if let Some(excerpt_en) = args.excerpt_en {
        article.excerpt_en = excerpt_en;
    }
    if let Some(excerpt_ar) = args.excerpt_ar {
        article.excerpt_ar = excerpt_ar;
    }
    if args.stdin {
        article.content_en = read_stdin()?;
    } else if let Some(content) = args.content {
        article.content_en = content;
    }
    if let Some(image) = args.image {
        article.image = image;
    }
    if let Some(status) = args.status {
        article.status = parse_field("status", &status)?;
    }

    let saved = panel.store.save(article)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Article saved successfully!\n");
        panel.render_articles();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_update_service(args: UpdateServiceArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let (_, mut service) = resolve::<Service>(&panel.store, &args.id)?;

    if let Some(icon) = args.icon {
        service.icon = icon;
    }
    if let Some(title_en) = args.title_en {
        service.title_en = title_en;
    }
    if let Some(title_ar) = args.title_ar {
        service.title_ar = title_ar;
    }
    if let Some(desc_en) = args.desc_en {
        service.desc_en = desc_en;
    }
    if let Some(desc_ar) = args.desc_ar {
        service.desc_ar = desc_ar;
    }

    let saved = panel.store.save(service)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Service saved successfully!\n");
        panel.render_services();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_update_testimonial(args: UpdateTestimonialArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let (_, mut testimonial) = resolve::<Testimonial>(&panel.store, &args.id)?;

    if let Some(name_en) = args.name_en {
        testimonial.name_en = name_en;
    }
    if let Some(name_ar) = args.name_ar {
        testimonial.name_ar = name_ar;
    }
    if let Some(position_en) = args.position_en {
        testimonial.position_en = position_en;
    }
    if let Some(position_ar) = args.position_ar {
        testimonial.position_ar = position_ar;
    }
    if let Some(quote_en) = args.quote_en {
        testimonial.quote_en = quote_en;
    }
    if let Some(quote_ar) = args.quote_ar {
        testimonial.quote_ar = quote_ar;
    }
    if let Some(rating) = args.rating {
        testimonial.rating = rating;
    }

    let saved = panel.store.save(testimonial)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Testimonial saved successfully!\n");
        panel.render_testimonials();
        panel.render_counts();
    }

    Ok(())
}

pub fn handle_list(kind: String, json: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    let kind: Kind = kind.parse().map_err(|_| StoreError::UnknownKind(kind))?;

    match kind {
        Kind::Projects => {
            if json {
                println!("{}", serde_json::to_string_pretty(&panel.store.list::<Project>())?);
            } else {
                panel.render_projects();
            }
        }
        Kind::Articles => {
            if json {
                println!("{}", serde_json::to_string_pretty(&panel.store.list::<Article>())?);
            } else {
                panel.render_articles();
            }
        }
        Kind::Services => {
            if json {
                println!("{}", serde_json::to_string_pretty(&panel.store.list::<Service>())?);
            } else {
                panel.render_services();
            }
        }
        Kind::Testimonials => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&panel.store.list::<Testimonial>())?
                );
            } else {
                panel.render_testimonials();
            }
        }
    }

    Ok(())
}

pub fn handle_get(kind: String, id: String, json: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    let kind: Kind = kind.parse().map_err(|_| StoreError::UnknownKind(kind))?;

    match kind {
        Kind::Projects => {
            let (uuid, project) = resolve::<Project>(&panel.store, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                println!("Project ({})", uuid);
                println!("Title: {}", panel.lang.pick(&project.title_en, &project.title_ar));
                println!("Category: {}", project.category);
                if !project.location.is_empty() {
                    println!("Location: {}", project.location);
                }
                println!("Status: {}", project.status);
                let desc = panel.lang.pick(&project.desc_en, &project.desc_ar);
                if !desc.is_empty() {
                    println!("Description: {}", desc);
                }
                if !project.image.is_empty() {
                    println!("Image: {}", project.image);
                }
                if let Some(created_at) = project.created_at {
                    println!("Created: {}", created_at.format("%Y-%m-%d %H:%M"));
                }
            }
        }
        Kind::Articles => {
            let (uuid, article) = resolve::<Article>(&panel.store, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&article)?);
            } else {
                println!("Article ({})", uuid);
                println!("Title: {}", panel.lang.pick(&article.title_en, &article.title_ar));
                println!("Category: {}", article.category);
                if let Some(date) = article.date {
                    println!("Date: {}", date);
                }
                println!("Status: {}", article.status);
                let excerpt = panel.lang.pick(&article.excerpt_en, &article.excerpt_ar);
                if !excerpt.is_empty() {
                    println!("Excerpt: {}", excerpt);
                }
                if !article.image.is_empty() {
                    println!("Image: {}", article.image);
                }
                if let Some(created_at) = article.created_at {
                    println!("Created: {}", created_at.format("%Y-%m-%d %H:%M"));
                }
                if !article.content_en.is_empty() {
                    println!("\n{}", article.content_en);
                }
            }
        }
        Kind::Services => {
            let (uuid, service) = resolve::<Service>(&panel.store, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&service)?);
            } else {
                println!("Service ({})", uuid);
                println!("Title: {}", panel.lang.pick(&service.title_en, &service.title_ar));
                if !service.icon.is_empty() {
                    println!("Icon: {}", service.icon);
                }
                let desc = panel.lang.pick(&service.desc_en, &service.desc_ar);
                if !desc.is_empty() {
                    println!("Description: {}", desc);
                }
            }
        }
        Kind::Testimonials => {
            let (uuid, testimonial) = resolve::<Testimonial>(&panel.store, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&testimonial)?);
            } else {
                println!("Testimonial ({})", uuid);
                println!(
                    "Name: {}",
                    panel.lang.pick(&testimonial.name_en, &testimonial.name_ar)
                );
                let position = panel
                    .lang
                    .pick(&testimonial.position_en, &testimonial.position_ar);
                if !position.is_empty() {
                    println!("Position: {}", position);
                }
                println!("Rating: {}", testimonial.rating);
                let quote = panel.lang.pick(&testimonial.quote_en, &testimonial.quote_ar);
                if !quote.is_empty() {
                    println!("Quote: {}", quote);
                }
            }
        }
    }

    Ok(())
}

pub fn handle_delete(kind: String, id: String, force: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    let kind: Kind = kind.parse().map_err(|_| StoreError::UnknownKind(kind))?;

    match kind {
        Kind::Projects => {
            let (uuid, project) = resolve::<Project>(&panel.store, &id)?;
            let label = panel.lang.pick(&project.title_en, &project.title_ar).to_string();
            if !panel.confirm_delete(&label, force)? {
                println!("Cancelled.");
                return Ok(());
            }
            panel.store.delete::<Project>(uuid)?;
            println!("{}\n", panel.lang.pick("Deleted successfully", "تم الحذف بنجاح"));
            panel.render_projects();
        }
        Kind::Articles => {
            let (uuid, article) = resolve::<Article>(&panel.store, &id)?;
            let label = panel.lang.pick(&article.title_en, &article.title_ar).to_string();
            if !panel.confirm_delete(&label, force)? {
                println!("Cancelled.");
                return Ok(());
            }
            panel.store.delete::<Article>(uuid)?;
            println!("{}\n", panel.lang.pick("Deleted successfully", "تم الحذف بنجاح"));
            panel.render_articles();
        }
        Kind::Services => {
            let (uuid, service) = resolve::<Service>(&panel.store, &id)?;
            let label = panel.lang.pick(&service.title_en, &service.title_ar).to_string();
            if !panel.confirm_delete(&label, force)? {
                println!("Cancelled.");
                return Ok(());
            }
            panel.store.delete::<Service>(uuid)?;
            println!("{}\n", panel.lang.pick("Deleted successfully", "تم الحذف بنجاح"));
            panel.render_services();
        }
        Kind::Testimonials => {
            let (uuid, testimonial) = resolve::<Testimonial>(&panel.store, &id)?;
            let label = panel
                .lang
                .pick(&testimonial.name_en, &testimonial.name_ar)
                .to_string();
            if !panel.confirm_delete(&label, force)? {
                println!("Cancelled.");
                return Ok(());
            }
            panel.store.delete::<Testimonial>(uuid)?;
            println!("{}\n", panel.lang.pick("Deleted successfully", "تم الحذف بنجاح"));
            panel.render_testimonials();
        }
    }

    panel.render_counts();

    Ok(())
}

pub fn handle_settings_set(args: SettingsSetArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let hero = HeroContent {
        subtitle_en: args.hero_subtitle_en,
        subtitle_ar: args.hero_subtitle_ar,
        title_en: args.hero_title_en,
        title_ar: args.hero_title_ar,
        desc_en: args.hero_desc_en,
        desc_ar: args.hero_desc_ar,
    };
    let stats = SiteStats {
        projects: args.stat_projects,
        years: args.stat_years,
        awards: args.stat_awards,
    };
    let contact = ContactInfo {
        address_en: args.contact_address_en,
        address_ar: args.contact_address_ar,
        phone: args.contact_phone,
        email: args.contact_email,
        hours_en: args.contact_hours_en,
        hours_ar: args.contact_hours_ar,
    };
    let social = SocialLinks {
        facebook: args.social_facebook,
        instagram: args.social_instagram,
        linkedin: args.social_linkedin,
        twitter: args.social_twitter,
    };

    let settings = SiteSettings {
        hero: (hero != HeroContent::default()).then_some(hero),
        stats: (stats != SiteStats::default()).then_some(stats),
        contact: (contact != ContactInfo::default()).then_some(contact),
        social: (social != SocialLinks::default()).then_some(social),
    };

    panel.store.save_singleton(&settings)?;

    println!("Settings saved successfully!\n");
    panel.render_settings();

    Ok(())
}

pub fn handle_settings_show(json: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    if json {
        let settings = panel.store.load_singleton::<SiteSettings>().unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        panel.render_settings();
    }

    Ok(())
}

pub fn handle_seo_set(args: SeoSetArgs) -> Result<()> {
    let panel = AdminPanel::open()?;

    let seo = SeoSettings {
        title: args.title,
        description: args.description,
        keywords: args.keywords,
        og_title: args.og_title,
        og_description: args.og_description,
        og_image: args.og_image,
        schema_type: args.schema_type,
        service_area: args.service_area,
    };

    panel.store.save_singleton(&seo)?;

    println!("SEO settings saved successfully!\n");
    panel.render_seo();

    Ok(())
}

pub fn handle_seo_show(json: bool) -> Result<()> {
    let panel = AdminPanel::open()?;

    if json {
        let seo = panel.store.load_singleton::<SeoSettings>().unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&seo)?);
    } else {
        panel.render_seo();
    }

    Ok(())
}
