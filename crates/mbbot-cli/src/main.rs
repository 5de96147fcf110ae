use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use mbbot_cli::commands::{self, release::ReleaseField};
use mbbot_cli::{ConnectionArgs, EditArgs, OutputFormat};
use mbbot_client::EditLimits;
use mbbot_core::edit::EntityType;

#[derive(Parser)]
#[command(name = "mbbot")]
#[command(author, version)]
#[command(
    about = "Enter single MusicBrainz edits through the website's forms",
    long_about = "mbbot logs in as a bot account and drives the MusicBrainz web forms the way \
                  an editor would. Every command enters at most one edit and refuses to \
                  overwrite data that is already present."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many edits the account may still enter today
    EditsLeft {
        /// Open edits allowed at any time
        #[arg(long, default_value_t = 2000)]
        max_open_edits: u64,

        /// Edits allowed per day
        #[arg(long, default_value_t = 1000)]
        max_edits_per_day: u64,
    },

    /// Attach a URL relationship to an entity
    AddUrl {
        /// Type of the entity (artist, release, release-group, ...)
        #[arg(long, value_name = "TYPE")]
        entity_type: EntityType,

        /// Row id or MBID of the entity
        #[arg(long, value_name = "ID")]
        entity: String,

        /// Relationship link type id
        #[arg(long, value_name = "ID")]
        link_type: u32,

        /// The URL to attach
        #[arg(value_name = "URL")]
        url: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Replace the address of a URL entity
    EditUrl {
        /// MBID of the URL entity
        #[arg(value_name = "MBID")]
        gid: String,

        /// Address the URL is expected to have now
        #[arg(long)]
        old: String,

        /// New address
        #[arg(long)]
        new: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Set the type of an artist that has none
    SetArtistType {
        /// MBID of the artist
        #[arg(value_name = "MBID")]
        gid: String,

        /// Artist type id (1 person, 2 group, ...)
        #[arg(long = "type", value_name = "ID")]
        type_id: u32,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Remove a relationship
    RemoveRelationship {
        /// Relationship row id
        #[arg(value_name = "ID")]
        id: u64,

        /// Type of the first entity
        #[arg(long, value_name = "TYPE")]
        type0: EntityType,

        /// Type of the second entity
        #[arg(long, value_name = "TYPE")]
        type1: EntityType,

        /// Edit note
        #[arg(short = 'm', long, default_value = "")]
        note: String,
    },

    /// Merge entities into a target
    Merge {
        /// Type of the entities
        #[arg(long, value_name = "TYPE")]
        entity_type: EntityType,

        /// Row id of the entity to keep
        #[arg(long, value_name = "ID")]
        target: u64,

        /// Row ids of the entities to merge
        #[arg(value_name = "ID", required = true)]
        ids: Vec<u64>,

        /// Edit note
        #[arg(short = 'm', long, default_value = "")]
        note: String,
    },

    /// Change the script of a release
    SetReleaseScript {
        /// MBID of the release
        #[arg(value_name = "MBID")]
        gid: String,

        /// Script id the release has now
        #[arg(long, value_name = "ID")]
        old: u32,

        /// Script id to set
        #[arg(long, value_name = "ID")]
        new: u32,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Change the language of a release
    SetReleaseLanguage {
        /// MBID of the release
        #[arg(value_name = "MBID")]
        gid: String,

        /// Language id the release has now
        #[arg(long, value_name = "ID")]
        old: u32,

        /// Language id to set
        #[arg(long, value_name = "ID")]
        new: u32,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Change the format of the first medium of a release
    SetReleaseMediumFormat {
        /// MBID of the release
        #[arg(value_name = "MBID")]
        gid: String,

        /// Format id the medium has now
        #[arg(long, value_name = "ID")]
        old: u32,

        /// Format id to set
        #[arg(long, value_name = "ID")]
        new: u32,

        /// Edit note
        #[arg(short = 'm', long, default_value = "")]
        note: String,
    },

    /// Cancel one of the account's open edits
    CancelEdit {
        /// Edit number
        #[arg(value_name = "EDIT")]
        id: u64,

        /// Edit note
        #[arg(short = 'm', long, default_value = "")]
        note: String,
    },

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for mbbot.

SUPPORTED SHELLS:
    bash, zsh, fish, powershell, elvish

INSTALLATION:
    Bash:
        mbbot completion --shell bash > ~/.local/share/bash-completion/completions/mbbot
        (or source it from ~/.bashrc)

    Zsh:
        mbbot completion --shell zsh > ~/.zfunc/_mbbot
        and add `fpath=(~/.zfunc $fpath)` to ~/.zshrc before compinit

    Fish:
        mbbot completion --shell fish > ~/.config/fish/completions/mbbot.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let connection = &cli.connection;
    let format = cli.format;

    match cli.command {
        Commands::EditsLeft {
            max_open_edits,
            max_edits_per_day,
        } => commands::allowance::execute(
            connection,
            EditLimits {
                max_open_edits,
                max_edits_per_day,
            },
            format,
        ),
        Commands::AddUrl {
            entity_type,
            entity,
            link_type,
            url,
            edit,
        } => commands::urls::add_url(
            connection,
            entity_type,
            &entity,
            link_type,
            &url,
            &edit,
            format,
        ),
        Commands::EditUrl { gid, old, new, edit } => {
            commands::urls::edit_url(connection, &gid, &old, &new, &edit, format)
        }
        Commands::SetArtistType { gid, type_id, edit } => {
            commands::artist::set_type(connection, &gid, type_id, &edit, format)
        }
        Commands::RemoveRelationship {
            id,
            type0,
            type1,
            note,
        } => commands::relationship::remove(connection, id, type0, type1, &note, format),
        Commands::Merge {
            entity_type,
            target,
            ids,
            note,
        } => commands::merge::execute(connection, entity_type, target, &ids, &note, format),
        Commands::SetReleaseScript { gid, old, new, edit } => commands::release::set_information(
            connection,
            &gid,
            ReleaseField::Script,
            old,
            new,
            &edit,
            format,
        ),
        Commands::SetReleaseLanguage { gid, old, new, edit } => {
            commands::release::set_information(
                connection,
                &gid,
                ReleaseField::Language,
                old,
                new,
                &edit,
                format,
            )
        }
        Commands::SetReleaseMediumFormat { gid, old, new, note } => {
            commands::release::set_medium_format(connection, &gid, old, new, &note, format)
        }
        Commands::CancelEdit { id, note } => {
            commands::notes::cancel_edit(connection, id, &note, format)
        }
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new(mbbot_cli::log_directives(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
