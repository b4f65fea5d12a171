//! In-memory movie catalog.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::movie::{self, Movie};

/// Ordered, process-wide movie collection.
///
/// Readers share the lock, `add` and `delete_by_entry_no` take it
/// exclusively. Entry numbers are not checked for uniqueness.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::from_movies(Vec::new())
    }

    /// Create a catalog holding the three seed records.
    pub fn seeded() -> Self {
        Self::from_movies(movie::seed())
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies: RwLock::new(movies) }
    }

    /// Snapshot of every movie in catalog order.
    pub fn list_all(&self) -> Vec<Movie> {
        self.read().clone()
    }

    /// Append `movie` and hand it back.
    pub fn add(&self, movie: Movie) -> Movie {
        let mut movies = self.write();
        movies.push(movie.clone());
        debug!(entry_no = movie.entry_no, total = movies.len(), "movie added");
        movie
    }

    /// Movies released in `year`, or `None` when there are none.
    pub fn find_by_year(&self, year: i64) -> Option<Vec<Movie>> {
        self.select(|m| m.year_of_release == year)
    }

    /// Movies whose director contains `name`, ignoring case, or `None`
    /// when there are none.
    pub fn find_by_director(&self, name: &str) -> Option<Vec<Movie>> {
        self.select(|m| m.directed_by(name))
    }

    /// Remove every movie numbered `entry_no`, returning how many went.
    ///
    /// Survivors keep their relative order.
    pub fn delete_by_entry_no(&self, entry_no: i64) -> usize {
        let mut movies = self.write();
        let before = movies.len();
        movies.retain(|m| m.entry_no != entry_no);
        let removed = before - movies.len();
        debug!(entry_no, removed, total = movies.len(), "delete by entry number");
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn select(&self, pred: impl Fn(&Movie) -> bool) -> Option<Vec<Movie>> {
        let found: Vec<Movie> = self.read().iter().filter(|m| pred(m)).cloned().collect();
        (!found.is_empty()).then_some(found)
    }

    // No operation panics while holding the lock, so a poisoned vector is
    // still whole.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_nos(movies: &[Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.entry_no).collect()
    }

    fn movie(entry_no: i64, director: &str, year: i64) -> Movie {
        Movie {
            entry_no,
            movie_name: format!("movie {entry_no}"),
            director: director.into(),
            year_of_release: year,
            ..Movie::default()
        }
    }

    #[test]
    fn seeded_catalog_scenario() {
        let store = MovieStore::seeded();

        assert_eq!(entry_nos(&store.find_by_year(2012).unwrap()), [1]);
        assert_eq!(entry_nos(&store.find_by_director("shankar").unwrap()), [1, 2]);
        assert_eq!(store.delete_by_entry_no(2), 1);
        assert_eq!(entry_nos(&store.list_all()), [1, 3]);
        assert!(store.find_by_year(1999).is_none());
    }

    #[test]
    fn unknown_year_is_not_found() {
        let store = MovieStore::seeded();
        for year in [0, 1999, 2013, 2023, -1] {
            assert!(store.find_by_year(year).is_none(), "year {year}");
        }
    }

    #[test]
    fn added_movie_is_listed_once_and_findable() {
        let store = MovieStore::seeded();
        let added = store.add(movie(4, "S. S. Rajamouli", 2015));

        let all = store.list_all();
        assert_eq!(all.iter().filter(|m| **m == added).count(), 1);
        assert_eq!(all.last(), Some(&added));
        assert_eq!(store.find_by_year(2015), Some(vec![added.clone()]));
        assert!(store.find_by_director("s. s.").unwrap().contains(&added));
    }

    #[test]
    fn director_search_is_case_insensitive_substring() {
        let store = MovieStore::seeded();
        assert_eq!(entry_nos(&store.find_by_director("raj").unwrap()), [3]);
        assert_eq!(entry_nos(&store.find_by_director("ANKA").unwrap()), [1, 2]);
        assert!(store.find_by_director("nolan").is_none());
    }

    #[test]
    fn empty_director_matches_everything() {
        let store = MovieStore::seeded();
        assert_eq!(store.find_by_director("").unwrap().len(), 3);
    }

    #[test]
    fn deleting_missing_entry_leaves_catalog_untouched() {
        let store = MovieStore::seeded();
        let before = store.list_all();
        assert_eq!(store.delete_by_entry_no(42), 0);
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn delete_removes_consecutive_duplicates() {
        let store = MovieStore::from_movies(vec![
            movie(1, "a", 2000),
            movie(7, "b", 2001),
            movie(7, "c", 2002),
            movie(2, "d", 2003),
            movie(7, "e", 2004),
        ]);

        assert_eq!(store.delete_by_entry_no(7), 3);
        assert_eq!(entry_nos(&store.list_all()), [1, 2]);
    }

    #[test]
    fn duplicate_entry_numbers_are_accepted() {
        let store = MovieStore::seeded();
        store.add(movie(1, "x", 1990));
        assert_eq!(store.len(), 4);
        assert_eq!(store.delete_by_entry_no(1), 2);
        assert_eq!(entry_nos(&store.list_all()), [2, 3]);
    }

    #[test]
    fn listing_is_stable_without_mutation() {
        let store = MovieStore::seeded();
        assert_eq!(store.list_all(), store.list_all());
    }

    #[test]
    fn new_store_is_empty() {
        let store = MovieStore::new();
        assert!(store.is_empty());
        assert!(store.find_by_director("").is_none());
        assert_eq!(store.delete_by_entry_no(1), 0);
    }

    #[test]
    fn concurrent_writers_do_not_lose_movies() {
        use std::sync::Arc;

        let store = Arc::new(MovieStore::new());
        let workers: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.add(movie(t * 1000 + i, "d", 2000));
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(store.len(), 800);
    }
}
