use super::super::domain::{
    services::rank_by_popularity, Film, FilmId, FilmRepository, LikeRepository, NewFilm,
};
use crate::modules::catalog::domain::{Genre, GenreRepository, Mpa, RatingRepository};
use crate::modules::user::domain::{User, UserId, UserRepository};
use crate::shared::config::FilmPolicy;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info, log_warn};
use chrono::NaiveDate;
use futures::future::try_join_all;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct FilmService {
    film_repo: Arc<dyn FilmRepository>,
    like_repo: Arc<dyn LikeRepository>,
    user_repo: Arc<dyn UserRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    policy: FilmPolicy,
}

impl FilmService {
    pub fn new(
        film_repo: Arc<dyn FilmRepository>,
        like_repo: Arc<dyn LikeRepository>,
        user_repo: Arc<dyn UserRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        policy: FilmPolicy,
    ) -> Self {
        Self {
            film_repo,
            like_repo,
            user_repo,
            genre_repo,
            rating_repo,
            policy,
        }
    }

    pub async fn create_film(&self, film: NewFilm) -> AppResult<Film> {
        self.check_release_date(film.release_date)?;
        let mpa = self.resolve_rating(&film.mpa).await?;
        let genres = self.resolve_genres(&film.genres).await?;

        let created = self
            .film_repo
            .create(NewFilm { mpa, genres, ..film })
            .await?;
        log_info!("Created film {} ({})", created.id, created.name);

        Ok(created)
    }

    /// Overwrite an existing film and its genre set; returns the film as re-read
    pub async fn update_film(&self, film: Film) -> AppResult<Film> {
        self.check_release_date(film.release_date)?;
        let mpa = self.resolve_rating(&film.mpa).await?;
        let genres = self.resolve_genres(&film.genres).await?;
        let id = film.id;

        self.film_repo
            .update(Film { mpa, genres, ..film })
            .await
            .inspect_err(|e| log_warn!("Film update rejected: {}", e))?;
        log_info!("Updated film {}", id);

        self.get_film(id).await
    }

    pub async fn get_film(&self, id: FilmId) -> AppResult<Film> {
        let (mut film, genres) = futures::try_join!(
            self.film_repo.get_by_id(id),
            self.genre_repo.genres_of_film(id)
        )?;
        film.genres = genres;
        Ok(film)
    }

    pub async fn get_all_films(&self) -> AppResult<Vec<Film>> {
        let films = self.film_repo.get_all().await?;
        self.attach_genres(films).await
    }

    /// Remove every film together with its likes and genre links
    pub async fn clear_films(&self) -> AppResult<()> {
        self.film_repo.clear().await?;
        log_info!("Cleared all films");
        Ok(())
    }

    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let film = self.require_film_and_user(film_id, user_id).await?;

        self.like_repo.add_like(film_id, user_id).await?;
        log_info!("User {} liked film {}", user_id, film_id);

        Ok(film)
    }

    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let film = self.require_film_and_user(film_id, user_id).await?;

        self.like_repo
            .remove_like(film_id, user_id)
            .await
            .inspect_err(|e| log_warn!("Like removal rejected: {}", e))?;
        log_info!("User {} no longer likes film {}", user_id, film_id);

        Ok(film)
    }

    /// Users who liked the film, ascending by id
    pub async fn likes_of(&self, film_id: FilmId) -> AppResult<Vec<User>> {
        self.film_repo.get_by_id(film_id).await?;

        let user_ids: Vec<UserId> = self.like_repo.likes_of(film_id).await?.into_iter().collect();
        self.user_repo.find_by_ids(&user_ids).await
    }

    pub async fn like_count(&self, film_id: FilmId) -> AppResult<usize> {
        self.film_repo.get_by_id(film_id).await?;
        self.like_repo.like_count_of(film_id).await
    }

    /// Most liked films first, ties broken by the newer film.
    ///
    /// `None` falls back to the configured default; a count of zero or
    /// below is rejected.
    pub async fn popular_films(&self, count: Option<i64>) -> AppResult<Vec<Film>> {
        let limit = match count {
            None => self.policy.popular_default_count,
            Some(n) if n <= 0 => {
                log_warn!("Rejected popular films request with count {}", n);
                return Err(AppError::ValidationError(format!(
                    "Count must be positive, got {}",
                    n
                )));
            }
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let timer = TimedOperation::new("popular_films");
        let (films, like_counts) =
            futures::try_join!(self.film_repo.get_all(), self.like_repo.like_counts())?;
        let ranked = rank_by_popularity(films, &like_counts, limit);
        let ranked = self.attach_genres(ranked).await?;
        timer.finish_with_info(&format!("{} of limit {}", ranked.len(), limit));

        Ok(ranked)
    }

    fn check_release_date(&self, release_date: NaiveDate) -> AppResult<()> {
        if release_date < self.policy.release_date_floor {
            log_warn!(
                "Rejected film released {} (floor {})",
                release_date,
                self.policy.release_date_floor
            );
            return Err(AppError::ValidationError(format!(
                "Release date {} is earlier than {}",
                release_date, self.policy.release_date_floor
            )));
        }
        Ok(())
    }

    async fn resolve_rating(&self, mpa: &Mpa) -> AppResult<Mpa> {
        self.rating_repo
            .rating_by_id(mpa.id)
            .await
            .inspect_err(|e| log_warn!("{}", e))
    }

    /// Replace caller-supplied genre references with catalog entries
    async fn resolve_genres(&self, genres: &BTreeSet<Genre>) -> AppResult<BTreeSet<Genre>> {
        let ids: BTreeSet<_> = genres.iter().map(|g| g.id).collect();
        let resolved = try_join_all(ids.into_iter().map(|id| self.genre_repo.genre_by_id(id)))
            .await
            .inspect_err(|e| log_warn!("{}", e))?;
        Ok(resolved.into_iter().collect())
    }

    async fn attach_genres(&self, mut films: Vec<Film>) -> AppResult<Vec<Film>> {
        let ids: Vec<FilmId> = films.iter().map(|f| f.id).collect();
        let mut genres = self.genre_repo.genres_of_films(&ids).await?;
        log_debug!("Attaching genres to {} films", films.len());

        for film in films.iter_mut() {
            film.genres = genres.remove(&film.id).unwrap_or_default();
        }
        Ok(films)
    }

    async fn require_film_and_user(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let (film, _) = futures::try_join!(self.get_film(film_id), self.user_repo.get_by_id(user_id))
            .inspect_err(|e| log_warn!("{}", e))?;
        Ok(film)
    }
}
