mod data;


use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::config::ConsoleConfig;
use console::net::types::ImportProgress;
use console::pages::dashboard::{Dashboard, TimePeriod};
use console::pages::import_export::{ImportError, ImportExportPage, export_message};
use console::pages::login::{LoginError, LoginForm};
use console::pages::server_form::{FormError, ServerForm};
use console::state::inventory::{BulkAction, BulkOutcome, InventoryPage};
use console::state::session::{AccessError, DEFAULT_VIEWPORT_WIDTH, Session};
use console::state::users::{UserAdmin, UserAdminError};
use console::util::preferences::{JsonFilePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
use console::util::sidebar::visible_items;
use console::util::theme::Theme;
use console::{Credentials, MockBackend};
use inventory::catalog::options_for;
use inventory::facet::Facet;
use inventory::stats::Slice;
use inventory::transfer::{DateRange, ExportDocument, ExportFormat, ExportOptions, ImportMode, TransferError};
use inventory::users::{UserDraft, UserError, UserId, UserRole, UserSort, UserSortField, UserStatus};
use inventory::{ServerField, ServerId, ServerRecord, SortDirection, SortState, StoreError, format_timestamp};
use serde::Serialize;
use time::OffsetDateTime;

use crate::data::{DataError, DataFile};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `rackdesk login` or pass --username and --password")]
    NotSignedIn,
    #[error("field `{0}` cannot be edited")]
    NotEditable(ServerField),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Users(#[from] UserAdminError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Preferences(#[from] PreferenceError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("failed to write {path}: {source}")]
    Output { path: PathBuf, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rackdesk", about = "Server inventory admin console")]
struct Cli {
    /// Preference file (theme, sidebar, remembered user).
    #[arg(long, global = true, env = "RACKDESK_PREFS")]
    prefs: Option<PathBuf>,

    /// Inventory and user data file; seed data when absent.
    #[arg(long, global = true, env = "RACKDESK_DATA")]
    data: Option<PathBuf>,

    #[arg(long, global = true, env = "RACKDESK_USERNAME")]
    username: Option<String>,

    #[arg(long, global = true, env = "RACKDESK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Skip the simulated backend latency.
    #[arg(long, global = true, default_value_t = false)]
    instant: bool,

    /// Print JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Log at info level (default: warnings only).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and remember the user in the preference file.
    Login,
    Logout,
    Whoami,
    Servers(ServersCommand),
    Dashboard {
        #[arg(long, default_value = "7d")]
        period: TimePeriod,
    },
    /// Upload a spreadsheet, preview it, and append its valid rows.
    Import(ImportArgs),
    Export(ExportArgs),
    /// Write the empty import template.
    Template {
        #[arg(long, default_value = "excel")]
        format: ExportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Select options offered for a server field.
    Options { field: ServerField },
    Users(UsersCommand),
    Prefs(PrefsCommand),
}

#[derive(Args, Debug)]
struct ServersCommand {
    #[command(subcommand)]
    command: ServersSubcommand,
}

#[derive(Subcommand, Debug)]
enum ServersSubcommand {
    List(ListArgs),
    Show {
        id: ServerId,
    },
    Add {
        /// `field=value`, repeatable.
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(ServerField, String)>,
        /// Full draft as JSON; `--set` values are applied on top.
        #[arg(long)]
        draft: Option<String>,
    },
    Edit {
        id: ServerId,
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(ServerField, String)>,
    },
    Delete {
        id: ServerId,
    },
    /// Apply a bulk action to the given ids.
    Bulk {
        action: BulkAction,
        #[arg(required = true)]
        ids: Vec<ServerId>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,
    /// `facet=value`, repeatable; values within a facet are OR-ed.
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(Facet, String)>,
    #[arg(long, default_value = "hostname")]
    sort: ServerField,
    #[arg(long, default_value = "asc")]
    direction: SortDirection,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long, default_value_t = 25)]
    page_size: usize,
}

#[derive(Args, Debug)]
struct ImportArgs {
    file: String,
    #[arg(long, default_value = "append")]
    mode: ImportMode,
    /// Preview only.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Write the error log CSV here.
    #[arg(long)]
    errors_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long, default_value = "excel")]
    format: ExportFormat,
    /// all, 7d, 30d or 90d.
    #[arg(long, default_value = "all")]
    range: DateRange,
    /// Custom range start (RFC 3339); requires --to.
    #[arg(long, requires = "to", value_parser = parse_timestamp)]
    from: Option<OffsetDateTime>,
    #[arg(long, requires = "from", value_parser = parse_timestamp)]
    to: Option<OffsetDateTime>,
    /// Columns to export, repeatable; all exportable columns by default.
    #[arg(long = "field")]
    fields: Vec<ServerField>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long)]
        status: Option<UserStatus>,
        #[arg(long, default_value = "username")]
        sort: UserSortField,
        #[arg(long, default_value = "asc")]
        direction: SortDirection,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Add {
        /// Account name (letters, digits, underscores).
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: UserRole,
        #[arg(long, default_value_t = false)]
        inactive: bool,
    },
    Edit {
        id: UserId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<UserRole>,
    },
    Toggle {
        id: UserId,
    },
    Delete {
        id: UserId,
    },
    ResetPassword {
        id: UserId,
    },
}

#[derive(Args, Debug)]
struct PrefsCommand {
    #[command(subcommand)]
    command: PrefsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PrefsSubcommand {
    Show,
    /// Set the theme, or toggle it when omitted.
    Theme { theme: Option<Theme> },
    /// Set the sidebar state, or toggle it when omitted.
    Sidebar {
        #[arg(long)]
        collapsed: Option<bool>,
    },
}

fn parse_assignment(raw: &str) -> Result<(ServerField, String), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected field=value, got '{raw}'"))?;
    let field = key.parse::<ServerField>().map_err(|err| err.to_string())?;
    Ok((field, value.to_owned()))
}

fn parse_filter(raw: &str) -> Result<(Facet, String), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected facet=value, got '{raw}'"))?;
    let facet = key.parse::<Facet>().map_err(|err| err.to_string())?;
    Ok((facet, value.to_owned()))
}

fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339).map_err(|err| err.to_string())
}

// =============================================================================
// CONTEXT
// =============================================================================

struct CliContext {
    config: ConsoleConfig,
    backend: MockBackend,
    session: Session,
    data: DataFile,
    credentials: Option<Credentials>,
    json: bool,
}

impl CliContext {
    fn open(cli: &Cli) -> Result<Self, CliError> {
        let mut config = ConsoleConfig::from_env();
        if cli.instant {
            config = config.instant();
        }
        let store: Box<dyn PreferenceStore> = match &cli.prefs {
            Some(path) => Box::new(JsonFilePreferences::open(path.clone())?),
            None => Box::new(MemoryPreferences::new()),
        };
        let credentials = cli
            .username
            .as_ref()
            .map(|username| Credentials::new(username.clone(), cli.password.clone().unwrap_or_default()));
        Ok(Self {
            backend: MockBackend::new(config.latencies),
            config,
            session: Session::new(store, DEFAULT_VIEWPORT_WIDTH),
            data: DataFile::new(cli.data.clone()),
            credentials,
            json: cli.json,
        })
    }

    /// Log in with the given credentials, or fall back to the remembered user.
    async fn authenticate(&mut self) -> Result<(), CliError> {
        if let Some(credentials) = &self.credentials {
            let mut form = LoginForm::new(self.config.max_login_attempts);
            form.submit(&self.backend, &mut self.session, credentials).await?;
            return Ok(());
        }
        if self.session.is_authenticated() { Ok(()) } else { Err(CliError::NotSignedIn) }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::INFO } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut ctx = CliContext::open(&cli)?;
    let now = OffsetDateTime::now_utc();

    match cli.command {
        Command::Login => run_login(&mut ctx).await,
        Command::Logout => {
            ctx.session.sign_out()?;
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            ctx.authenticate().await?;
            let user = ctx.session.require_user()?;
            print_value(ctx.json, user, || {
                let pages: Vec<&str> = visible_items(user.role).map(|item| item.label).collect();
                format!("{} ({}, {})\npages: {}", user.name, user.username, user.role, pages.join(", "))
            })
        }
        Command::Servers(servers) => run_servers(&mut ctx, servers, now).await,
        Command::Dashboard { period } => run_dashboard(&mut ctx, period, now).await,
        Command::Import(args) => run_import(&mut ctx, args, now).await,
        Command::Export(args) => run_export(&mut ctx, args, now).await,
        Command::Template { format, out } => {
            let mut page = ImportExportPage::new(now);
            page.set_format(format);
            write_document(&page.template(), out.as_deref())
        }
        Command::Options { field } => {
            let options = options_for(field).unwrap_or_default();
            print_value(ctx.json, &options, || options.join("\n"))
        }
        Command::Users(users) => run_users(&mut ctx, users, now).await,
        Command::Prefs(prefs) => run_prefs(&mut ctx, prefs),
    }
}

async fn run_login(ctx: &mut CliContext) -> Result<(), CliError> {
    if ctx.credentials.is_none() {
        return Err(CliError::NotSignedIn);
    }
    ctx.authenticate().await?;
    let user = ctx.session.require_user()?;
    println!("signed in as {} ({})", user.name, user.role);
    Ok(())
}

// =============================================================================
// SERVERS
// =============================================================================

async fn run_servers(ctx: &mut CliContext, servers: ServersCommand, now: OffsetDateTime) -> Result<(), CliError> {
    ctx.authenticate().await?;
    let (store, users) = ctx.data.load()?;
    let mut page = InventoryPage::new(store).with_search_debounce(ctx.config.search_debounce);

    match servers.command {
        ServersSubcommand::List(args) => {
            page.set_search(args.search);
            for (facet, value) in &args.filters {
                page.toggle_filter(*facet, value);
            }
            page.set_sort(SortState::new(args.sort, args.direction));
            page.set_page_size(args.page_size);
            page.set_page(args.page);
            let view = page.view();
            let range = page.range();
            print_value(ctx.json, &view, || {
                let mut out = server_table(&view.visible);
                out.push_str(&format!(
                    "\nShowing {} to {} of {} (page {} of {})",
                    range.start,
                    range.end,
                    range.total,
                    page.query().page.number(),
                    view.total_pages.max(1)
                ));
                out
            })
        }
        ServersSubcommand::Show { id } => {
            let record = page.store().get(id).ok_or(StoreError::NotFound(id))?;
            print_value(ctx.json, record, || {
                ServerField::ALL
                    .iter()
                    .map(|field| format!("{:<20} {}", field.label(), record.field_text(*field)))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        ServersSubcommand::Add { set, draft } => {
            let mut form = ServerForm::add();
            if let Some(raw) = draft {
                form.set_draft(serde_json::from_str(&raw)?);
            }
            apply_assignments(&mut form, set)?;
            let saved = form.save(&ctx.backend, &mut page, now).await?;
            ctx.data.save(page.store(), &users)?;
            println!("{} (id {})", saved.message, saved.id);
            Ok(())
        }
        ServersSubcommand::Edit { id, set } => {
            let mut form = ServerForm::edit(&page, id)?;
            apply_assignments(&mut form, set)?;
            let saved = form.save(&ctx.backend, &mut page, now).await?;
            ctx.data.save(page.store(), &users)?;
            println!("{}", saved.message);
            Ok(())
        }
        ServersSubcommand::Delete { id } => {
            let removed = page.remove(id)?;
            ctx.data.save(page.store(), &users)?;
            println!("deleted {} ({})", removed.hostname, removed.id);
            Ok(())
        }
        ServersSubcommand::Bulk { action, ids, out } => {
            for id in ids {
                if !page.store().contains(id) {
                    return Err(StoreError::NotFound(id).into());
                }
                page.select(id, true);
            }
            match page.bulk(action, &ExportOptions::default(), now)? {
                BulkOutcome::Exported(document) => write_document(&document, out.as_deref()),
                BulkOutcome::Acknowledged { action, count } => {
                    println!("{action} requested for {count} servers");
                    Ok(())
                }
            }
        }
    }
}

fn apply_assignments(form: &mut ServerForm, set: Vec<(ServerField, String)>) -> Result<(), CliError> {
    for (field, value) in set {
        if !form.set(field, value) {
            return Err(CliError::NotEditable(field));
        }
    }
    Ok(())
}

fn server_table(records: &[&ServerRecord]) -> String {
    let mut out = format!(
        "{:<4} {:<18} {:<16} {:<28} {:<9} {:<16} {}",
        "ID", "HOSTNAME", "IP", "OPERATING SYSTEM", "STATUS", "LOCATION", "UPDATED"
    );
    for record in records {
        out.push_str(&format!(
            "\n{:<4} {:<18} {:<16} {:<28} {:<9} {:<16} {}",
            record.id,
            record.hostname,
            record.server_ip,
            record.operating_system,
            record.status,
            record.location,
            format_timestamp(record.last_updated)
        ));
    }
    out
}

// =============================================================================
// DASHBOARD
// =============================================================================

async fn run_dashboard(ctx: &mut CliContext, period: TimePeriod, now: OffsetDateTime) -> Result<(), CliError> {
    ctx.authenticate().await?;
    let (store, _) = ctx.data.load()?;
    let mut dashboard = Dashboard::new(store.records(), ctx.config.dashboard_refresh, now);
    dashboard.set_period(period);
    let stats = dashboard.stats();
    print_value(ctx.json, stats, || {
        let counts = stats.counts;
        let mut out = format!(
            "Total {}  Live {}  Shutdown {}  Newly added {} ({})",
            counts.total,
            counts.live,
            counts.shutdown,
            counts.newly_added,
            period.subtitle()
        );
        for (title, slices) in [
            ("By application owner", &stats.by_application_owner),
            ("By location", &stats.by_location),
            ("By application", &stats.by_application_name),
            ("By operating system", &stats.by_operating_system),
        ] {
            out.push_str(&format!("\n\n{title}"));
            out.push_str(&slice_lines(slices));
        }
        out.push_str(&format!("\n\nLast updated: {}", format_timestamp(dashboard.last_refresh())));
        out
    })
}

fn slice_lines(slices: &[Slice]) -> String {
    slices
        .iter()
        .map(|slice| format!("\n  {:<28} {:>4}  {:>5.1}%", slice.name, slice.count, slice.percent))
        .collect()
}

// =============================================================================
// IMPORT / EXPORT
// =============================================================================

async fn run_import(ctx: &mut CliContext, args: ImportArgs, now: OffsetDateTime) -> Result<(), CliError> {
    ctx.authenticate().await?;
    let (store, users) = ctx.data.load()?;
    let mut inventory = InventoryPage::new(store);
    let mut page = ImportExportPage::new(now);
    page.set_mode(args.mode);

    let report = |progress: ImportProgress| eprintln!("processing {}: {}%", args.file, progress.percent());
    let preview = page.upload_file(&ctx.backend, &args.file, &report).await?.clone();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!(
            "{} rows: {} valid, {} errors, {} warnings",
            preview.total_rows, preview.valid_rows, preview.error_rows, preview.warning_rows
        );
        for row in &preview.rows {
            println!(
                "  row {:<3} {:<16} {:<18} {:<8} {}",
                row.row,
                row.server_ip,
                row.hostname,
                row.status.as_str(),
                row.errors.join("; ")
            );
        }
    }

    if let Some(path) = &args.errors_out {
        if let Some(log) = page.error_log(now) {
            write_document(&log, Some(path.as_path()))?;
        }
    }
    if args.dry_run {
        return Ok(());
    }

    let summary = page.import(&ctx.backend, &mut inventory, now).await?;
    ctx.data.save(inventory.store(), &users)?;
    println!("{}", summary.message);
    Ok(())
}

async fn run_export(ctx: &mut CliContext, args: ExportArgs, now: OffsetDateTime) -> Result<(), CliError> {
    ctx.authenticate().await?;
    let (store, _) = ctx.data.load()?;
    let mut page = ImportExportPage::new(now);
    page.set_format(args.format);
    let range = match (args.from, args.to) {
        (Some(from), Some(to)) => DateRange::custom(from, to)?,
        _ => args.range,
    };
    page.set_date_range(range);
    if !args.fields.is_empty() {
        for field in ServerField::EDITABLE {
            page.set_field(field, args.fields.contains(&field));
        }
    }
    let document = page.export(store.records(), now)?;
    eprintln!("{}", export_message(&document));
    write_document(&document, args.out.as_deref())
}

/// CSV is written as text; Excel documents are written as their JSON table.
fn write_document(document: &ExportDocument, out: Option<&Path>) -> Result<(), CliError> {
    let body = match document.format {
        ExportFormat::Csv => document.to_csv(),
        ExportFormat::Excel => serde_json::to_string_pretty(document)?,
    };
    match out {
        Some(path) => {
            std::fs::write(path, body).map_err(|source| CliError::Output { path: path.to_path_buf(), source })?;
            eprintln!("wrote {} records to {}", document.record_count(), path.display());
        }
        None => print!("{body}"),
    }
    Ok(())
}

// =============================================================================
// USERS
// =============================================================================

async fn run_users(ctx: &mut CliContext, users: UsersCommand, now: OffsetDateTime) -> Result<(), CliError> {
    ctx.authenticate().await?;
    let (store, directory) = ctx.data.load()?;
    let mut admin = UserAdmin::open(&ctx.session, directory)?;

    match users.command {
        UsersSubcommand::List { search, role, status, sort, direction, page } => {
            admin.set_search(search);
            admin.set_role_filter(role);
            admin.set_status_filter(status);
            admin.set_sort(UserSort { field: sort, direction });
            admin.set_page(page);
            let stats = admin.stats(now);
            let view = admin.view();
            print_value(ctx.json, &view, || {
                let mut out = format!(
                    "{} users, {} active, {} admins, {} logged in today\n",
                    stats.total_users, stats.active_users, stats.admin_users, stats.recent_logins
                );
                out.push_str(&format!("{:<4} {:<18} {:<30} {:<6} {:<9} {}", "ID", "USERNAME", "EMAIL", "ROLE", "STATUS", "LAST LOGIN"));
                for user in &view.visible {
                    let last_login = user.last_login.map_or_else(|| "never".to_owned(), format_timestamp);
                    out.push_str(&format!(
                        "\n{:<4} {:<18} {:<30} {:<6} {:<9} {}",
                        user.id, user.username, user.email, user.role, user.status, last_login
                    ));
                }
                out
            })?;
            return Ok(());
        }
        UsersSubcommand::Add { name, email, role, inactive } => {
            let status = if inactive { UserStatus::Inactive } else { UserStatus::Active };
            let draft = UserDraft { username: name, email, role: Some(role), status };
            let id = admin.add(&ctx.backend, draft, now).await?;
            println!("added user {id}");
        }
        UsersSubcommand::Edit { id, name, email, role } => {
            let account = admin.directory().get(id).ok_or(UserAdminError::User(UserError::NotFound(id)))?;
            let mut draft = UserDraft::from_account(account);
            if let Some(name) = name {
                draft.username = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if role.is_some() {
                draft.role = role;
            }
            admin.update(&ctx.backend, id, draft, now).await?;
            println!("updated user {id}");
        }
        UsersSubcommand::Toggle { id } => {
            let status = admin.toggle_status(id, now)?;
            println!("user {id} is now {status}");
        }
        UsersSubcommand::Delete { id } => {
            let removed = admin.remove(&ctx.backend, id, now).await?;
            println!("deleted user {}", removed.username);
        }
        UsersSubcommand::ResetPassword { id } => {
            println!("{}", admin.reset_password(id, now)?);
        }
    }
    ctx.data.save(&store, admin.directory())?;
    Ok(())
}

// =============================================================================
// PREFERENCES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrefsView<'a> {
    theme: Theme,
    sidebar_collapsed: bool,
    user: Option<&'a console::CurrentUser>,
}

fn run_prefs(ctx: &mut CliContext, prefs: PrefsCommand) -> Result<(), CliError> {
    match prefs.command {
        PrefsSubcommand::Show => {}
        PrefsSubcommand::Theme { theme: Some(theme) } => ctx.session.set_theme(theme)?,
        PrefsSubcommand::Theme { theme: None } => {
            ctx.session.toggle_theme()?;
        }
        PrefsSubcommand::Sidebar { collapsed: Some(collapsed) } => ctx.session.set_sidebar_collapsed(collapsed)?,
        PrefsSubcommand::Sidebar { collapsed: None } => ctx.session.toggle_sidebar()?,
    }
    let view = PrefsView {
        theme: ctx.session.theme(),
        sidebar_collapsed: ctx.session.sidebar().collapsed(),
        user: ctx.session.user(),
    };
    print_value(ctx.json, &view, || {
        let user = view.user.map_or("nobody", |user| user.username.as_str());
        format!("theme: {}\nsidebar collapsed: {}\nsigned in: {user}", view.theme, view.sidebar_collapsed)
    })
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_value<T, F>(json: bool, value: &T, text: F) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
