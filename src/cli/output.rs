//! Output formatting utilities

use crate::domain::Post;

/// Format a list of posts for display, one line per post
pub fn format_post_list(posts: &[&Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{}  {}  {}",
            post.id,
            post.updated_at.format("%d-%m-%Y %H:%M"),
            post.title
        ));
        if !post.tags.is_empty() {
            output.push_str(&format!("  [{}]", post.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format a single post in full
pub fn format_post(post: &Post) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n", post.title));
    output.push_str(&format!("Id:      {}\n", post.id));
    output.push_str(&format!(
        "Created: {}\n",
        post.created_at.format("%d-%m-%Y %H:%M")
    ));
    output.push_str(&format!(
        "Updated: {}\n",
        post.updated_at.format("%d-%m-%Y %H:%M")
    ));
    if !post.tags.is_empty() {
        output.push_str(&format!("Tags:    {}\n", post.tags.join(", ")));
    }
    output.push('\n');
    output.push_str(&post.content);
    output.push('\n');

    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}
