use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "archstudio")]
#[command(version, about = "Bilingual content store and admin CLI for an architecture studio site")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace in the current directory
    Init,

    /// Log in to the admin panel
    Login {
        /// Username recorded in the session flag
        username: String,
    },

    /// Log out and clear the session flag
    Logout,

    /// Show or set the display language
    Lang {
        /// Language to switch to (en or ar)
        #[arg(value_name = "LANG")]
        lang: Option<String>,
    },

    /// Show aggregate counts for all collections
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new record
    Add(AddCommand),

    /// Update an existing record
    Update(UpdateCommand),

    /// List records of one kind
    List {
        /// Record kind (project, article, service, testimonial)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single record
    Get {
        /// Record kind (project, article, service, testimonial)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Record id (full id or unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a record
    Delete {
        /// Record kind (project, article, service, testimonial)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Record id (full id or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or replace the site settings
    Settings(SettingsCommand),

    /// Show or replace the SEO settings
    Seo(SeoCommand),
}

#[derive(Args, Debug)]
pub struct AddCommand {
    #[command(subcommand)]
    pub entity: AddEntity,
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    /// Add a new project
    Project(AddProjectArgs),

    /// Add a new article
    Article(AddArticleArgs),

    /// Add a new service
    Service(AddServiceArgs),

    /// Add a new testimonial
    Testimonial(AddTestimonialArgs),
}

#[derive(Args, Debug)]
pub struct AddProjectArgs {
    /// English title
    pub title: String,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// Category (residential, commercial, cultural, interior)
    #[arg(long, default_value = "residential")]
    pub category: String,

    /// Project location
    #[arg(long)]
    pub location: Option<String>,

    /// English description
    #[arg(long)]
    pub desc_en: Option<String>,

    /// Arabic description
    #[arg(long)]
    pub desc_ar: Option<String>,

    /// Image URL or path
    #[arg(long)]
    pub image: Option<String>,

    /// Visibility (published, draft)
    #[arg(long, default_value = "published")]
    pub status: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArticleArgs {
    /// English title
    pub title: String,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// Category (news, insights, awards)
    #[arg(long, default_value = "news")]
    pub category: String,

    /// Publication date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// English excerpt
    #[arg(long)]
    pub excerpt_en: Option<String>,

    /// Arabic excerpt
    #[arg(long)]
    pub excerpt_ar: Option<String>,

    /// Article body as HTML
    #[arg(long)]
    pub content: Option<String>,

    /// Read the article body from stdin
    #[arg(long, conflicts_with = "content")]
    pub stdin: bool,

    /// Image URL or path
    #[arg(long)]
    pub image: Option<String>,

    /// Visibility (published, draft)
    #[arg(long, default_value = "published")]
    pub status: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddServiceArgs {
    /// English title
    pub title: String,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// Icon class name (e.g. "fas fa-pencil-ruler")
    #[arg(long)]
    pub icon: Option<String>,

    /// English description
    #[arg(long)]
    pub desc_en: Option<String>,

    /// Arabic description
    #[arg(long)]
    pub desc_ar: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddTestimonialArgs {
    /// Client name in English
    pub name: String,

    /// Client name in Arabic
    #[arg(long)]
    pub name_ar: Option<String>,

    /// Position or company (English)
    #[arg(long)]
    pub position_en: Option<String>,

    /// Position or company (Arabic)
    #[arg(long)]
    pub position_ar: Option<String>,

    /// Quote text (English)
    #[arg(long)]
    pub quote_en: Option<String>,

    /// Quote text (Arabic)
    #[arg(long)]
    pub quote_ar: Option<String>,

    /// Star rating from 1 to 5
    #[arg(long, default_value = "5")]
    pub rating: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UpdateCommand {
    #[command(subcommand)]
    pub entity: UpdateEntity,
}

#[derive(Subcommand, Debug)]
pub enum UpdateEntity {
    /// Update a project
    Project(UpdateProjectArgs),

    /// Update an article
    Article(UpdateArticleArgs),

    /// Update a service
    Service(UpdateServiceArgs),

    /// Update a testimonial
    Testimonial(UpdateTestimonialArgs),
}

#[derive(Args, Debug)]
pub struct UpdateProjectArgs {
    /// Record id (full id or unique prefix)
    pub id: String,

    /// English title
    #[arg(long)]
    pub title_en: Option<String>,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// Category (residential, commercial, cultural, interior)
    #[arg(long)]
    pub category: Option<String>,

    /// Project location
    #[arg(long)]
    pub location: Option<String>,

    /// English description
    #[arg(long)]
    pub desc_en: Option<String>,

    /// Arabic description
    #[arg(long)]
    pub desc_ar: Option<String>,

    /// Image URL or path
    #[arg(long)]
    pub image: Option<String>,

    /// Visibility (published, draft)
    #[arg(long)]
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArticleArgs {
    /// Record id (full id or unique prefix)
    pub id: String,

    /// English title
    #[arg(long)]
    pub title_en: Option<String>,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// Category (news, insights, awards)
    #[arg(long)]
    pub category: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// English excerpt
    #[arg(long)]
    pub excerpt_en: Option<String>,

    /// Arabic excerpt
    #[arg(long)]
    pub excerpt_ar: Option<String>,

    /// Article body as HTML
    #[arg(long)]
    pub content: Option<String>,

    /// Read the article body from stdin
    #[arg(long, conflicts_with = "content")]
    pub stdin: bool,

    /// Image URL or path
    #[arg(long)]
    pub image: Option<String>,

    /// Visibility (published, draft)
    #[arg(long)]
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UpdateServiceArgs {
    /// Record id (full id or unique prefix)
    pub id: String,

    /// Icon class name
    #[arg(long)]
    pub icon: Option<String>,

    /// English title
    #[arg(long)]
    pub title_en: Option<String>,

    /// Arabic title
    #[arg(long)]
    pub title_ar: Option<String>,

    /// English description
    #[arg(long)]
    pub desc_en: Option<String>,

    /// Arabic description
    #[arg(long)]
    pub desc_ar: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UpdateTestimonialArgs {
    /// Record id (full id or unique prefix)
    pub id: String,

    /// Client name in English
    #[arg(long)]
    pub name_en: Option<String>,

    /// Client name in Arabic
    #[arg(long)]
    pub name_ar: Option<String>,

    /// Position or company (English)
    #[arg(long)]
    pub position_en: Option<String>,

    /// Position or company (Arabic)
    #[arg(long)]
    pub position_ar: Option<String>,

    /// Quote text (English)
    #[arg(long)]
    pub quote_en: Option<String>,

    /// Quote text (Arabic)
    #[arg(long)]
    pub quote_ar: Option<String>,

    /// Star rating from 1 to 5
    #[arg(long)]
    pub rating: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Replace the stored settings with exactly the given fields
    Set(SettingsSetArgs),

    /// Show the stored settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    /// Hero subtitle (English)
    #[arg(long)]
    pub hero_subtitle_en: Option<String>,

    /// Hero subtitle (Arabic)
    #[arg(long)]
    pub hero_subtitle_ar: Option<String>,

    /// Hero title (English)
    #[arg(long)]
    pub hero_title_en: Option<String>,

    /// Hero title (Arabic)
    #[arg(long)]
    pub hero_title_ar: Option<String>,

    /// Hero description (English)
    #[arg(long)]
    pub hero_desc_en: Option<String>,

    /// Hero description (Arabic)
    #[arg(long)]
    pub hero_desc_ar: Option<String>,

    /// Completed projects stat
    #[arg(long)]
    pub stat_projects: Option<String>,

    /// Years of experience stat
    #[arg(long)]
    pub stat_years: Option<String>,

    /// Awards won stat
    #[arg(long)]
    pub stat_awards: Option<String>,

    /// Office address (English)
    #[arg(long)]
    pub contact_address_en: Option<String>,

    /// Office address (Arabic)
    #[arg(long)]
    pub contact_address_ar: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub contact_phone: Option<String>,

    /// Contact email
    #[arg(long)]
    pub contact_email: Option<String>,

    /// Working hours (English)
    #[arg(long)]
    pub contact_hours_en: Option<String>,

    /// Working hours (Arabic)
    #[arg(long)]
    pub contact_hours_ar: Option<String>,

    /// Facebook URL
    #[arg(long)]
    pub social_facebook: Option<String>,

    /// Instagram URL
    #[arg(long)]
    pub social_instagram: Option<String>,

    /// LinkedIn URL
    #[arg(long)]
    pub social_linkedin: Option<String>,

    /// Twitter URL
    #[arg(long)]
    pub social_twitter: Option<String>,
}

#[derive(Args, Debug)]
pub struct SeoCommand {
    #[command(subcommand)]
    pub action: SeoAction,
}

#[derive(Subcommand, Debug)]
pub enum SeoAction {
    /// Replace the stored SEO settings with exactly the given fields
    Set(SeoSetArgs),

    /// Show the stored SEO settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SeoSetArgs {
    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Meta description
    #[arg(long)]
    pub description: Option<String>,

    /// Meta keywords (comma separated)
    #[arg(long)]
    pub keywords: Option<String>,

    /// Open Graph title
    #[arg(long)]
    pub og_title: Option<String>,

    /// Open Graph description
    #[arg(long)]
    pub og_description: Option<String>,

    /// Open Graph image URL
    #[arg(long)]
    pub og_image: Option<String>,

    /// Structured data type (e.g. ArchitectureFirm)
    #[arg(long)]
    pub schema_type: Option<String>,

    /// Service area text
    #[arg(long)]
    pub service_area: Option<String>,
}
