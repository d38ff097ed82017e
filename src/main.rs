use blogr::application::{compose_body, init, ConfigService};
use blogr::cli::{format_post, format_post_list, format_tag_list, parse_post_id, split_tags};
use blogr::cli::{Cli, Commands};
use blogr::domain::{Post, PostId, PostStore};
use blogr::error::{BlogrError, Result};
use blogr::infrastructure::{BlogRepository, JsonFileBackend};
use clap::Parser;
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::New {
            title,
            content,
            tags,
        }) => cmd_new(title, content, tags),
        Some(Commands::Edit {
            id,
            title,
            content,
            tags,
            clear_tags,
            compose,
        }) => cmd_edit(id, title, content, tags, clear_tags, compose),
        Some(Commands::Delete { id, force }) => cmd_delete(id, force),
        Some(Commands::Show { id }) => cmd_show(id),
        Some(Commands::List { tag, limit }) => cmd_list(tag, limit),
        Some(Commands::Tags) => cmd_tags(),
        Some(Commands::Config { key, value, list }) => cmd_config(key, value, list),
        None => {
            println!("blogr - single-user note/blog manager");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Open the store for the discovered blog root, reporting corrupt-blob
/// recovery on stderr.
fn open_store(repo: &BlogRepository) -> Result<PostStore<JsonFileBackend>> {
    let store = PostStore::open(repo.backend())?;
    if store.recovered_from_corrupt() {
        eprintln!("Warning: stored posts could not be read; starting from an empty collection");
    }
    Ok(store)
}

fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlogrError::Validation(format!(
            "post {} must not be empty",
            field
        )));
    }
    Ok(())
}

fn cmd_new(title: String, content: Option<String>, tags: Vec<String>) -> Result<()> {
    let repo = BlogRepository::discover()?;

    let title = title.trim().to_string();
    require_non_empty(&title, "title")?;

    let body = match content {
        Some(c) => c,
        None => {
            let config = repo.load_config()?;
            compose_body(&repo, &config.get_editor(), "")?
        }
    };
    require_non_empty(&body, "content")?;

    let mut store = open_store(&repo)?;
    let post = store.create(&title, &body, split_tags(&tags))?;

    println!("Created post {}", post.id);
    Ok(())
}

fn cmd_edit(
    id: String,
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
    clear_tags: bool,
    compose: bool,
) -> Result<()> {
    let repo = BlogRepository::discover()?;
    let id = parse_post_id(&id)?;

    let mut store = open_store(&repo)?;

    // Omitted fields keep the post's current values
    let existing = store
        .get_by_id(id)
        .cloned()
        .ok_or(BlogrError::PostNotFound(id.0))?;

    let new_title = title.unwrap_or_else(|| existing.title.clone());
    require_non_empty(&new_title, "title")?;

    let new_content = if compose {
        let config = repo.load_config()?;
        compose_body(&repo, &config.get_editor(), &existing.content)?
    } else {
        content.unwrap_or_else(|| existing.content.clone())
    };
    require_non_empty(&new_content, "content")?;

    let new_tags = if clear_tags {
        Vec::new()
    } else {
        match tags {
            Some(raw) => split_tags(&raw),
            None => existing.tags.clone(),
        }
    };

    match store.update(id, new_title.trim(), &new_content, new_tags)? {
        Some(post) => {
            println!("Updated post {}", post.id);
            Ok(())
        }
        None => Err(BlogrError::PostNotFound(id.0)),
    }
}

fn cmd_delete(id: String, force: bool) -> Result<()> {
    let repo = BlogRepository::discover()?;
    let id = parse_post_id(&id)?;

    if !force && !confirm_delete(id)? {
        println!("Aborted");
        return Ok(());
    }

    let mut store = open_store(&repo)?;
    if store.delete(id)? {
        println!("Deleted post {}", id);
    } else {
        println!("No post with id {}", id);
    }
    Ok(())
}

fn confirm_delete(id: PostId) -> Result<bool> {
    print!("Delete post {}? [y/N] ", id);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn cmd_show(id: String) -> Result<()> {
    let repo = BlogRepository::discover()?;
    let id = parse_post_id(&id)?;

    let store = open_store(&repo)?;
    match store.get_by_id(id) {
        Some(post) => {
            println!("{}", format_post(post).trim_end());
            Ok(())
        }
        None => Err(BlogrError::PostNotFound(id.0)),
    }
}

fn cmd_list(tag: Option<String>, limit: Option<usize>) -> Result<()> {
    let repo = BlogRepository::discover()?;
    let store = open_store(&repo)?;

    let mut posts: Vec<&Post> = match &tag {
        Some(t) => store.filter_by_tag(t),
        None => store.list_all().iter().collect(),
    };

    if let Some(n) = limit {
        posts.truncate(n);
    }

    println!("{}", format_post_list(&posts).trim_end());
    Ok(())
}

fn cmd_tags() -> Result<()> {
    let repo = BlogRepository::discover()?;
    let store = open_store(&repo)?;

    println!("{}", format_tag_list(&store.distinct_tags()).trim_end());
    Ok(())
}

fn cmd_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let repo = BlogRepository::discover()?;
    let service = ConfigService::new(repo);

    if list {
        let config = service.list()?;
        println!("editor = {}", config.editor);
        println!("created = {}", config.created.to_rfc3339());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
            Ok(())
        } else {
            let val = service.get(&k)?;
            println!("{}", val);
            Ok(())
        }
    } else {
        println!("Usage: blogr config [--list | <key> [<value>]]");
        println!("Valid keys: editor, created");
        Ok(())
    }
}
