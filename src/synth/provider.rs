//! Fake-value capability consumed by the synthesizer.
use chrono::{Local, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::FirstName;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// "Recent" dates fall within this many seconds before now.
const RECENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// One operation per semantic kind. Implementations decide where values come from.
pub trait ValueProvider {
    fn random_word(&mut self) -> String;
    fn random_integer(&mut self, min: i64, max: i64) -> i64;
    fn random_date(&mut self) -> NaiveDate;
    fn random_email(&mut self) -> String;
    fn random_street_name(&mut self) -> String;
    fn random_country(&mut self) -> String;
    fn random_city(&mut self) -> String;
    fn random_first_name(&mut self) -> String;
    fn random_boolean(&mut self) -> bool;
}

/// `fake` + `rand` backed provider.
#[derive(Debug, Clone)]
pub struct FakerProvider<R = StdRng> {
    rng: R,
}

impl FakerProvider<StdRng> {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> FakerProvider<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueProvider for FakerProvider<R> {
    fn random_word(&mut self) -> String {
        Word().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_integer(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
    fn random_date(&mut self) -> NaiveDate {
        let back = self.rng.gen_range(0..RECENT_WINDOW_SECS);
        (Local::now() - chrono::Duration::seconds(back)).date_naive()
    }
    fn random_email(&mut self) -> String {
        SafeEmail().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_street_name(&mut self) -> String {
        StreetName().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_country(&mut self) -> String {
        CountryName().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_city(&mut self) -> String {
        CityName().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_first_name(&mut self) -> String {
        FirstName().fake_with_rng::<String, _>(&mut self.rng)
    }
    fn random_boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_providers_agree() {
        let mut a = FakerProvider::seeded(7);
        let mut b = FakerProvider::seeded(7);
        assert_eq!(a.random_word(), b.random_word());
        assert_eq!(a.random_integer(1, 200), b.random_integer(1, 200));
        assert_eq!(a.random_email(), b.random_email());
    }

    #[test]
    fn integers_stay_in_range() {
        let mut p = FakerProvider::seeded(1);
        for _ in 0..500 {
            let n = p.random_integer(10_000, 99_999);
            assert!((10_000..=99_999).contains(&n));
        }
        assert_eq!(p.random_integer(5, 5), 5);
    }

    #[test]
    fn dates_are_recent() {
        let mut p = FakerProvider::from_entropy();
        let today = Local::now().date_naive();
        for _ in 0..50 {
            let d = p.random_date();
            assert!(d <= today);
            assert!((today - d).num_days() <= 1);
        }
    }

    #[test]
    fn emails_have_at_sign() {
        let mut p = FakerProvider::seeded(3);
        assert!(p.random_email().contains('@'));
    }
}
