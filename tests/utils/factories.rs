/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use filmorate::modules::catalog::{Genre, Mpa};
use filmorate::modules::film::{Film, NewFilm};
use filmorate::modules::user::NewUser;
use std::sync::atomic::{AtomicU32, Ordering};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

fn next_suffix() -> u32 {
    SEQUENCE.fetch_add(1, Ordering::SeqCst)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub struct UserFactory {
    login: String,
    name: Option<String>,
    email: String,
    birthday: NaiveDate,
}

impl Default for UserFactory {
    fn default() -> Self {
        let suffix = next_suffix();
        Self {
            login: format!("user{}", suffix),
            name: Some(format!("Test User {}", suffix)),
            email: format!("user{}@example.com", suffix),
            birthday: date(1990, 6, 15),
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(mut self, login: &str) -> Self {
        self.login = login.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn build(self) -> NewUser {
        let user = NewUser::new(self.login, self.email, self.birthday);
        match self.name {
            Some(name) => user.with_name(name),
            None => user,
        }
    }
}

pub struct FilmFactory {
    name: String,
    description: String,
    release_date: NaiveDate,
    duration: i64,
    mpa_id: i32,
    genre_ids: Vec<i32>,
}

impl Default for FilmFactory {
    fn default() -> Self {
        Self {
            name: format!("Test Film {}", next_suffix()),
            description: "A film made for tests".to_string(),
            release_date: date(1999, 3, 31),
            duration: 136,
            mpa_id: 4,
            genre_ids: Vec::new(),
        }
    }
}

impl FilmFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn mpa(mut self, mpa_id: i32) -> Self {
        self.mpa_id = mpa_id;
        self
    }

    pub fn genres(mut self, genre_ids: &[i32]) -> Self {
        self.genre_ids = genre_ids.to_vec();
        self
    }

    pub fn build(self) -> NewFilm {
        NewFilm::new(
            self.name,
            self.release_date,
            self.duration,
            Mpa::reference(self.mpa_id),
        )
        .with_description(self.description)
        .with_genres(self.genre_ids.into_iter().map(Genre::reference))
    }

    /// Same data as `build`, addressed to an existing id (for updates)
    pub fn build_with_id(self, id: i64) -> Film {
        self.build().into_film(id)
    }
}
