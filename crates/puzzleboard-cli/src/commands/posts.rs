use anyhow::Result;
use puzzleboard_core::PostStore;

pub fn run(posts: &impl PostStore, player: Option<&str>) -> Result<()> {
    let mut all = posts.scan_all()?;
    if let Some(player) = player {
        all.retain(|p| p.player_id == player);
    }
    all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    if all.is_empty() {
        println!("No posts stored.");
        return Ok(());
    }
    for post in &all {
        println!(
            "--- {} at {}",
            post.player_id,
            post.submitted_at.format("%Y-%m-%d %H:%M:%S")
        );
        println!("{}", post.text.trim_end());
    }
    Ok(())
}
