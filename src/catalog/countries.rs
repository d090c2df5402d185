use crate::catalog::CountryCatalog;
use crate::domain::country::{
    BestOlympics, ComparisonEntry, CountryComparison, CountryDetail, CountrySummary, Hosting,
    SportMedals, YearTotal,
};
use anyhow::Result;

pub struct StaticCountries {
    summaries: Vec<CountrySummary>,
    details: Vec<CountryDetail>,
    comparisons: Vec<ComparisonEntry>,
}

fn summary(code: &str, name: &str, flag: &str, participations: i64) -> CountrySummary {
    CountrySummary {
        code: code.to_string(),
        name: name.to_string(),
        flag: flag.to_string(),
        participations,
    }
}

fn hosting(year: i32, city: &str, season: &str) -> Hosting {
    Hosting {
        year,
        city: city.to_string(),
        season: season.to_string(),
    }
}

fn sport(name: &str, medals: i64) -> SportMedals {
    SportMedals {
        sport: name.to_string(),
        medals,
    }
}

impl StaticCountries {
    pub fn new() -> Self {
        let france = CountryDetail {
            code: "FRA".to_string(),
            name: "France".to_string(),
            flag: "🇫🇷".to_string(),
            total_medals: 840,
            gold: 248,
            silver: 276,
            bronze: 316,
            first_participation: 1896,
            hostings: vec![
                hosting(1900, "Paris", "Summer"),
                hosting(1924, "Paris", "Summer"),
                hosting(1924, "Chamonix", "Winter"),
                hosting(1968, "Grenoble", "Winter"),
                hosting(1992, "Albertville", "Winter"),
                hosting(2024, "Paris", "Summer"),
            ],
            top_sports: vec![
                sport("Fencing", 118),
                sport("Cycling", 92),
                sport("Athletics", 88),
            ],
            best_olympics: BestOlympics {
                year: 1900,
                medals: 101,
                city: "Paris".to_string(),
            },
            medals_by_year: vec![
                YearTotal { year: 1896, total: 11 },
                YearTotal { year: 1900, total: 101 },
                YearTotal { year: 1904, total: 0 },
                YearTotal { year: 1924, total: 38 },
                YearTotal { year: 1948, total: 29 },
                YearTotal { year: 1968, total: 15 },
                YearTotal { year: 1996, total: 37 },
                YearTotal { year: 2008, total: 43 },
                YearTotal { year: 2016, total: 42 },
                YearTotal { year: 2020, total: 33 },
            ],
        };

        let usa = CountryDetail {
            code: "USA".to_string(),
            name: "United States".to_string(),
            flag: "🇺🇸".to_string(),
            total_medals: 2827,
            gold: 1061,
            silver: 830,
            bronze: 936,
            first_participation: 1896,
            hostings: vec![
                hosting(1904, "St. Louis", "Summer"),
                hosting(1932, "Los Angeles", "Summer"),
                hosting(1932, "Lake Placid", "Winter"),
                hosting(1984, "Los Angeles", "Summer"),
                hosting(1996, "Atlanta", "Summer"),
                hosting(2002, "Salt Lake City", "Winter"),
            ],
            top_sports: vec![
                sport("Athletics", 826),
                sport("Swimming", 579),
                sport("Shooting", 116),
            ],
            best_olympics: BestOlympics {
                year: 1984,
                medals: 174,
                city: "Los Angeles".to_string(),
            },
            medals_by_year: vec![
                YearTotal { year: 1896, total: 20 },
                YearTotal { year: 1904, total: 239 },
                YearTotal { year: 1984, total: 174 },
                YearTotal { year: 1996, total: 101 },
                YearTotal { year: 2008, total: 112 },
                YearTotal { year: 2016, total: 121 },
                YearTotal { year: 2020, total: 113 },
            ],
        };

        Self {
            summaries: vec![
                summary("FRA", "France", "🇫🇷", 28),
                summary("USA", "United States", "🇺🇸", 28),
                summary("GBR", "Great Britain", "🇬🇧", 29),
                summary("CHN", "China", "🇨🇳", 11),
                summary("JPN", "Japan", "🇯🇵", 23),
                summary("GER", "Germany", "🇩🇪", 17),
                summary("AUS", "Australia", "🇦🇺", 27),
                summary("ITA", "Italy", "🇮🇹", 28),
            ],
            details: vec![france, usa],
            comparisons: vec![
                ComparisonEntry {
                    country: "FRA".to_string(),
                    total_medals: 840,
                    gold_rate: 0.295,
                    avg_medals_per_olympics: 30,
                },
                ComparisonEntry {
                    country: "USA".to_string(),
                    total_medals: 2827,
                    gold_rate: 0.395,
                    avg_medals_per_olympics: 101,
                },
                ComparisonEntry {
                    country: "CHN".to_string(),
                    total_medals: 608,
                    gold_rate: 0.387,
                    avg_medals_per_olympics: 55,
                },
            ],
        }
    }
}

impl Default for StaticCountries {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CountryCatalog for StaticCountries {
    async fn list(&self) -> Result<Vec<CountrySummary>> {
        Ok(self.summaries.clone())
    }

    async fn detail(&self, code: &str) -> Result<Option<CountryDetail>> {
        let code = code.to_uppercase();
        Ok(self.details.iter().find(|d| d.code == code).cloned())
    }

    async fn compare(&self, codes: &[String]) -> Result<CountryComparison> {
        let data: Vec<ComparisonEntry> = if codes.is_empty() {
            self.comparisons.clone()
        } else {
            self.comparisons
                .iter()
                .filter(|entry| codes.iter().any(|c| c.eq_ignore_ascii_case(&entry.country)))
                .cloned()
                .collect()
        };

        Ok(CountryComparison {
            countries: data.iter().map(|entry| entry.country.clone()).collect(),
            data,
        })
    }
}
