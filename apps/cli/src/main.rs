use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{load_settings, normalize_api_url},
    IdAssignment, UserStore, UserStoreClient,
};
use shared::{
    domain::{next_sequential_id, UserDraft, UserId},
    view::{apply_filter, clamp_page, paginate, total_pages, PageSize},
};
use tracing_subscriber::EnvFilter;

mod table;

#[derive(Parser, Debug)]
#[command(about = "List, search and edit records of a remote user collection")]
struct Args {
    /// Collection endpoint; overrides dashboard.toml and environment settings.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of users matching an optional search.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// One of 10, 25, 50, 100.
        #[arg(long)]
        per_page: Option<PageSize>,
    },
    Create {
        #[command(flatten)]
        fields: DraftArgs,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: DraftArgs,
    },
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(clap::Args, Debug)]
struct DraftArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    department: String,
}

impl DraftArgs {
    fn into_draft(self, id: Option<UserId>) -> UserDraft {
        UserDraft {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(raw) = args.api_url.as_deref() {
        settings.api_url = normalize_api_url(raw)?;
    }
    tracing::debug!(api_url = %settings.api_url, "using user store");
    let store = UserStoreClient::new(settings.api_url.clone());

    match args.command {
        Command::List {
            search,
            page,
            per_page,
        } => {
            let per_page = per_page.unwrap_or(settings.page_size);
            let users = store.list().await.context("listing users")?;
            let filtered = apply_filter(&users, &search);
            let pages = total_pages(filtered.len(), per_page);
            let page = clamp_page(page, pages);

            print!("{}", table::render(paginate(&filtered, page, per_page)));
            println!("{}", table::footer(page, pages, filtered.len()));
        }
        Command::Create { fields } => {
            let draft = fields.into_draft(None);
            draft.validate()?;

            let next_id = match settings.id_assignment {
                IdAssignment::Sequential => {
                    let existing = store.list().await.context("listing users")?;
                    Some(next_sequential_id(&existing))
                }
                IdAssignment::Server => None,
            };
            let mut created = store.create(&draft).await.context("creating user")?;
            if let Some(id) = next_id {
                created.id = id;
            }
            print!("{}", table::render(std::slice::from_ref(&created)));
        }
        Command::Update { id, fields } => {
            let id = UserId(id);
            let draft = fields.into_draft(Some(id));
            draft.validate()?;

            let mut updated = store.update(id, &draft).await.context("updating user")?;
            updated.id = id;
            print!("{}", table::render(std::slice::from_ref(&updated)));
        }
        Command::Delete { id } => {
            store.delete(UserId(id)).await.context("deleting user")?;
            println!("deleted user {id}");
        }
    }

    Ok(())
}
