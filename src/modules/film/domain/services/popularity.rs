use std::collections::HashMap;

use crate::modules::film::domain::entities::film::{Film, FilmId};

/// Order films by like count, most liked first.
///
/// Ties go to the higher id, i.e. the more recently created film. The result
/// is cut to `limit` entries; fewer films than `limit` are all returned.
pub fn rank_by_popularity(
    mut films: Vec<Film>,
    like_counts: &HashMap<FilmId, usize>,
    limit: usize,
) -> Vec<Film> {
    let likes = |film: &Film| like_counts.get(&film.id).copied().unwrap_or(0);

    films.sort_by(|a, b| likes(b).cmp(&likes(a)).then_with(|| b.id.cmp(&a.id)));
    films.truncate(limit);
    films
}
