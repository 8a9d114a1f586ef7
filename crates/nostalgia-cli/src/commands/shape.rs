use super::AppContext;
use anyhow::{Result, bail};
use nostalgia_core::shape::Category;

pub fn print(ctx: &AppContext, token: &str, index: usize, category: &str) -> Result<()> {
    let category = parse_category(category)?;
    let descriptor = ctx.settings().generator.generate(token, index, category);
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}

fn parse_category(value: &str) -> Result<Category> {
    let category = match value.to_ascii_lowercase().as_str() {
        "year" => Some(Category::Year),
        "preferences" => Some(Category::Preferences),
        "topics" => Some(Category::Topics),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(tag), None) => Category::from_tag(tag),
                _ => None,
            }
        }
    };
    match category {
        Some(category) => Ok(category),
        None => bail!("unknown category '{}', expected y, p or t", value),
    }
}
