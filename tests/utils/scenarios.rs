/// Behaviour every storage backend must reproduce exactly.
///
/// Each scenario starts from empty services and asserts through the public
/// service API only, so the same function runs against the in-memory store
/// and PostgreSQL.
use super::factories::{date, FilmFactory, UserFactory};
use super::helpers::{film_ids, user_ids};
use filmorate::modules::catalog::Genre;
use filmorate::modules::film::Film;
use filmorate::modules::user::User;
use filmorate::shared::errors::AppError;
use filmorate::shared::FilmPolicy;
use filmorate::AppServices;

async fn create_users(services: &AppServices, count: usize) -> Vec<User> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        users.push(
            services
                .users
                .create_user(UserFactory::new().build())
                .await
                .unwrap(),
        );
    }
    users
}

async fn create_films(services: &AppServices, count: usize) -> Vec<Film> {
    let mut films = Vec::with_capacity(count);
    for _ in 0..count {
        films.push(
            services
                .films
                .create_film(FilmFactory::new().build())
                .await
                .unwrap(),
        );
    }
    films
}

pub async fn identifiers_are_unique_and_increasing(services: &AppServices) {
    let users = create_users(services, 4).await;
    let films = create_films(services, 4).await;

    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert!(films.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert!(users[0].id > 0 && films[0].id > 0);

    // clearing never rewinds the counters
    services.users.clear_users().await.unwrap();
    services.films.clear_films().await.unwrap();
    let next_user = create_users(services, 1).await.remove(0);
    let next_film = create_films(services, 1).await.remove(0);

    assert!(next_user.id > users[3].id);
    assert!(next_film.id > films[3].id);
}

pub async fn blank_name_is_replaced_by_login(services: &AppServices) {
    let created = services
        .users
        .create_user(UserFactory::new().login("dolittle").without_name().build())
        .await
        .unwrap();
    assert_eq!(created.name, "dolittle");

    let mut renamed = created.clone();
    renamed.name = "Doctor".to_string();
    let renamed = services.users.update_user(renamed).await.unwrap();
    assert_eq!(renamed.name, "Doctor");

    let mut blanked = renamed.clone();
    blanked.name = "  ".to_string();
    let blanked = services.users.update_user(blanked).await.unwrap();
    assert_eq!(blanked.name, "dolittle");

    assert_eq!(services.users.get_user(created.id).await.unwrap(), blanked);
}

pub async fn update_replaces_whole_user(services: &AppServices) {
    let created = create_users(services, 1).await.remove(0);

    let mut changed = created.clone();
    changed.login = "renamed".to_string();
    changed.email = "renamed@example.com".to_string();
    changed.birthday = date(1980, 2, 29);
    services.users.update_user(changed.clone()).await.unwrap();

    assert_eq!(services.users.get_user(created.id).await.unwrap(), changed);

    let mut ghost = changed;
    ghost.id += 1000;
    assert_eq!(
        services.users.update_user(ghost.clone()).await.unwrap_err(),
        AppError::user_not_found(ghost.id)
    );
    assert_eq!(services.users.get_all_users().await.unwrap().len(), 1);
}

pub async fn friendship_is_symmetric(services: &AppServices) {
    let users = create_users(services, 2).await;
    let (a, b) = (users[0].id, users[1].id);

    let returned = services.users.add_friend(a, b).await.unwrap();
    assert_eq!(returned.id, a);

    assert_eq!(user_ids(&services.users.friends(a).await.unwrap()), vec![b]);
    assert_eq!(user_ids(&services.users.friends(b).await.unwrap()), vec![a]);

    // adding again changes nothing
    services.users.add_friend(b, a).await.unwrap();
    assert_eq!(services.users.friends(a).await.unwrap().len(), 1);

    services.users.remove_friend(b, a).await.unwrap();
    assert!(services.users.friends(a).await.unwrap().is_empty());
    assert!(services.users.friends(b).await.unwrap().is_empty());

    let err = services.users.remove_friend(a, b).await.unwrap_err();
    assert!(err.is_not_found());
}

pub async fn common_friends_of_two_users(services: &AppServices) {
    let users = create_users(services, 4).await;
    let (u1, u2, u3, u4) = (users[0].id, users[1].id, users[2].id, users[3].id);

    services.users.add_friend(u1, u3).await.unwrap();
    services.users.add_friend(u2, u3).await.unwrap();
    services.users.add_friend(u1, u4).await.unwrap();

    assert_eq!(
        user_ids(&services.users.common_friends(u1, u2).await.unwrap()),
        vec![u3]
    );
    assert_eq!(
        user_ids(&services.users.friends(u3).await.unwrap()),
        vec![u1, u2]
    );

    // with itself: every friend is common
    assert_eq!(
        user_ids(&services.users.common_friends(u1, u1).await.unwrap()),
        vec![u3, u4]
    );

    // disjoint friend sets
    assert!(services
        .users
        .common_friends(u2, u4)
        .await
        .unwrap()
        .is_empty());
}

pub async fn friendship_with_unknown_user_is_rejected(services: &AppServices) {
    let user = create_users(services, 1).await.remove(0);
    let ghost = user.id + 1000;

    assert_eq!(
        services.users.add_friend(user.id, ghost).await.unwrap_err(),
        AppError::user_not_found(ghost)
    );
    assert!(services.users.friends(user.id).await.unwrap().is_empty());
    assert!(services.users.friends(ghost).await.unwrap_err().is_not_found());
    assert!(services
        .users
        .common_friends(ghost, user.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(services.users.get_user(ghost).await.unwrap_err().is_not_found());
}

pub async fn likes_move_count_by_exactly_one(services: &AppServices) {
    let film = create_films(services, 1).await.remove(0);
    let users = create_users(services, 2).await;

    services.films.add_like(film.id, users[0].id).await.unwrap();
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 1);

    let returned = services.films.add_like(film.id, users[1].id).await.unwrap();
    assert_eq!(returned.id, film.id);
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 2);
    assert_eq!(
        user_ids(&services.films.likes_of(film.id).await.unwrap()),
        user_ids(&users)
    );

    services.films.remove_like(film.id, users[0].id).await.unwrap();
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 1);

    let err = services
        .films
        .remove_like(film.id, users[0].id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 1);
}

pub async fn likes_with_unknown_ids_are_rejected(services: &AppServices) {
    let film = create_films(services, 1).await.remove(0);
    let user = create_users(services, 1).await.remove(0);

    assert_eq!(
        services
            .films
            .add_like(film.id + 1000, user.id)
            .await
            .unwrap_err(),
        AppError::film_not_found(film.id + 1000)
    );
    assert_eq!(
        services
            .films
            .add_like(film.id, user.id + 1000)
            .await
            .unwrap_err(),
        AppError::user_not_found(user.id + 1000)
    );
    assert!(services
        .films
        .like_count(film.id + 1000)
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 0);
}

pub async fn popular_films_ranked_by_likes(services: &AppServices) {
    let films = create_films(services, 3).await;
    let (a, b, c) = (films[0].id, films[1].id, films[2].id);
    let users = create_users(services, 3).await;

    services.films.add_like(a, users[0].id).await.unwrap();
    for user in &users {
        services.films.add_like(b, user.id).await.unwrap();
    }
    services.films.add_like(c, users[0].id).await.unwrap();
    services.films.add_like(c, users[1].id).await.unwrap();

    assert_eq!(
        film_ids(&services.films.popular_films(Some(3)).await.unwrap()),
        vec![b, c, a]
    );
    assert_eq!(
        film_ids(&services.films.popular_films(Some(100)).await.unwrap()),
        vec![b, c, a]
    );
    assert_eq!(
        film_ids(&services.films.popular_films(Some(1)).await.unwrap()),
        vec![b]
    );
}

pub async fn popular_ties_go_to_newer_film(services: &AppServices) {
    let films = create_films(services, 3).await;
    let user = create_users(services, 1).await.remove(0);

    services.films.add_like(films[0].id, user.id).await.unwrap();
    services.films.add_like(films[2].id, user.id).await.unwrap();

    assert_eq!(
        film_ids(&services.films.popular_films(None).await.unwrap()),
        vec![films[2].id, films[0].id, films[1].id]
    );
}

pub async fn popular_count_must_be_positive(services: &AppServices) {
    create_films(services, 12).await;

    assert!(services
        .films
        .popular_films(Some(0))
        .await
        .unwrap_err()
        .is_validation());
    assert!(services
        .films
        .popular_films(Some(-1))
        .await
        .unwrap_err()
        .is_validation());
    assert_eq!(
        services.films.popular_films(None).await.unwrap().len(),
        FilmPolicy::default().popular_default_count
    );
}

pub async fn release_date_floor_is_inclusive(services: &AppServices) {
    let floor = FilmPolicy::default().release_date_floor;
    let day_before = floor.pred_opt().unwrap();

    let err = services
        .films
        .create_film(FilmFactory::new().release_date(day_before).build())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(services.films.get_all_films().await.unwrap().is_empty());

    let created = services
        .films
        .create_film(FilmFactory::new().release_date(floor).build())
        .await
        .unwrap();
    assert_eq!(created.release_date, floor);

    let mut moved_back = created.clone();
    moved_back.release_date = day_before;
    assert!(services
        .films
        .update_film(moved_back)
        .await
        .unwrap_err()
        .is_validation());
    assert_eq!(services.films.get_film(created.id).await.unwrap(), created);
}

pub async fn updating_unknown_film_changes_nothing(services: &AppServices) {
    let existing = services
        .films
        .create_film(FilmFactory::new().genres(&[1]).build())
        .await
        .unwrap();
    let before = services.films.get_all_films().await.unwrap();

    let ghost_id = existing.id + 1000;
    let err = services
        .films
        .update_film(FilmFactory::new().genres(&[2, 3]).build_with_id(ghost_id))
        .await
        .unwrap_err();

    assert_eq!(err, AppError::film_not_found(ghost_id));
    assert_eq!(services.films.get_all_films().await.unwrap(), before);
}

pub async fn film_genres_are_replaced_not_merged(services: &AppServices) {
    let created = services
        .films
        .create_film(FilmFactory::new().genres(&[2, 1, 2]).build())
        .await
        .unwrap();
    let names: Vec<_> = created.genres.iter().map(|g| g.name.clone()).collect();
    assert_eq!(names, vec!["Comedy", "Drama"]);
    assert_eq!(services.films.get_film(created.id).await.unwrap(), created);

    let mut regenred = created.clone();
    regenred.genres = [Genre::reference(6), Genre::reference(3)].into_iter().collect();
    let updated = services.films.update_film(regenred).await.unwrap();
    let ids: Vec<_> = updated.genres.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![3, 6]);

    let mut cleared = updated.clone();
    cleared.genres.clear();
    let updated = services.films.update_film(cleared).await.unwrap();
    assert!(updated.genres.is_empty());
    assert!(services
        .films
        .get_film(created.id)
        .await
        .unwrap()
        .genres
        .is_empty());
}

pub async fn film_rating_is_materialized_from_catalog(services: &AppServices) {
    let created = services
        .films
        .create_film(FilmFactory::new().mpa(3).build())
        .await
        .unwrap();
    assert_eq!(created.mpa.name, "PG-13");

    let mut rerated = created.clone();
    rerated.mpa.id = 5;
    rerated.mpa.name = "whatever the caller sent".to_string();
    let updated = services.films.update_film(rerated).await.unwrap();
    assert_eq!(updated.mpa.name, "NC-17");
}

pub async fn unknown_catalog_references_write_nothing(services: &AppServices) {
    let bad_rating = services
        .films
        .create_film(FilmFactory::new().mpa(42).build())
        .await
        .unwrap_err();
    assert!(bad_rating.is_not_found());

    let bad_genre = services
        .films
        .create_film(FilmFactory::new().genres(&[1, 42]).build())
        .await
        .unwrap_err();
    assert!(bad_genre.is_not_found());

    assert!(services.films.get_all_films().await.unwrap().is_empty());
}

pub async fn catalog_is_fixed_and_ordered(services: &AppServices) {
    let genres: Vec<_> = services
        .catalog
        .genres()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(
        genres,
        vec!["Comedy", "Drama", "Animation", "Thriller", "Documentary", "Action"]
    );

    let ratings: Vec<_> = services
        .catalog
        .ratings()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(ratings, vec!["G", "PG", "PG-13", "R", "NC-17"]);

    assert_eq!(services.catalog.genre(4).await.unwrap(), Genre::new(4, "Thriller"));
    assert_eq!(services.catalog.rating(1).await.unwrap().name, "G");
    assert!(services.catalog.genre(0).await.unwrap_err().is_not_found());
    assert!(services.catalog.rating(6).await.unwrap_err().is_not_found());
}

pub async fn clearing_users_drops_their_edges(services: &AppServices) {
    let users = create_users(services, 2).await;
    let film = create_films(services, 1).await.remove(0);
    services.users.add_friend(users[0].id, users[1].id).await.unwrap();
    services.films.add_like(film.id, users[0].id).await.unwrap();

    services.users.clear_users().await.unwrap();
    services.users.clear_users().await.unwrap();

    assert!(services.users.get_all_users().await.unwrap().is_empty());
    assert_eq!(services.films.like_count(film.id).await.unwrap(), 0);
    assert_eq!(services.films.get_all_films().await.unwrap().len(), 1);
}

pub async fn clearing_films_drops_likes_and_genres(services: &AppServices) {
    let user = create_users(services, 1).await.remove(0);
    let film = services
        .films
        .create_film(FilmFactory::new().genres(&[1, 2]).build())
        .await
        .unwrap();
    services.films.add_like(film.id, user.id).await.unwrap();

    services.films.clear_films().await.unwrap();

    assert!(services.films.get_all_films().await.unwrap().is_empty());
    assert!(services.films.popular_films(None).await.unwrap().is_empty());
    assert!(services.films.get_film(film.id).await.unwrap_err().is_not_found());
    assert_eq!(services.users.get_all_users().await.unwrap(), vec![user]);
    assert_eq!(services.catalog.genres().await.unwrap().len(), 6);
}

pub async fn lists_come_back_in_id_order(services: &AppServices) {
    let users = create_users(services, 3).await;
    let films = create_films(services, 3).await;

    services.users.add_friend(users[0].id, users[2].id).await.unwrap();
    services.users.add_friend(users[0].id, users[1].id).await.unwrap();

    assert_eq!(
        user_ids(&services.users.get_all_users().await.unwrap()),
        user_ids(&users)
    );
    assert_eq!(
        film_ids(&services.films.get_all_films().await.unwrap()),
        film_ids(&films)
    );
    assert_eq!(
        user_ids(&services.users.friends(users[0].id).await.unwrap()),
        vec![users[1].id, users[2].id]
    );
}
