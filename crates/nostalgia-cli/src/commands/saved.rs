use super::AppContext;
use anyhow::Result;
use colored::Colorize;

pub async fn list(ctx: &AppContext) -> Result<()> {
    let records = ctx.backends.records.list_all().await?;
    if records.is_empty() {
        println!("{}", "nothing saved yet".bright_black());
        return Ok(());
    }
    for (index, record) in records.iter().enumerate() {
        let label = if record.label.is_empty() {
            "(untitled)".to_string()
        } else {
            record.label.clone()
        };
        println!("{:>3}  {}", index, label.bright_cyan());
        println!(
            "     {}",
            format!(
                "{} | {} | {}",
                record.session.year, record.session.preferences, record.session.topics
            )
            .bright_black()
        );
    }
    Ok(())
}

pub async fn delete(ctx: &AppContext, index: usize) -> Result<()> {
    let records = ctx.backends.records.list_all().await?;
    if records.is_empty() {
        println!("{}", "nothing saved yet".bright_black());
        return Ok(());
    }
    let target = &records[index % records.len()];
    ctx.backends.records.delete_at(index).await?;
    println!("deleted {}", target.label.bright_cyan());
    Ok(())
}
