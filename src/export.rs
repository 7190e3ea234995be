use crate::error::{Error, Result};
use crate::model::Id;
use crate::recommend::Recommendations;
use log::info;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Row<'a> {
    user_id: &'a Id,
    kind: &'static str,
    rank: usize,
    candidate_id: &'a Id,
    score: u64,
}

fn rows(rec: &Recommendations) -> impl Iterator<Item = Row<'_>> {
    let friends = rec.friends.iter().enumerate().map(move |(i, (id, score))| Row {
        user_id: &rec.user.0,
        kind: "friend",
        rank: i + 1,
        candidate_id: &id.0,
        score: *score,
    });
    let pages = rec.pages.iter().enumerate().map(move |(i, (id, score))| Row {
        user_id: &rec.user.0,
        kind: "page",
        rank: i + 1,
        candidate_id: &id.0,
        score: *score,
    });
    friends.chain(pages)
}

/// Writes one row per ranked candidate:
/// `user_id,kind,rank,candidate_id,score`.
pub fn write_recommendations_csv(path: impl AsRef<Path>, recs: &[Recommendations]) -> Result<()> {
    let path = path.as_ref();
    // header is written by hand so that an empty report still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["user_id", "kind", "rank", "candidate_id", "score"])?;
    let mut count = 0;
    for rec in recs {
        for row in rows(rec) {
            writer.serialize(row)?;
            count += 1;
        }
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    info!("wrote {} recommendation rows to {}", count, path.display());
    Ok(())
}
