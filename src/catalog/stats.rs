use crate::catalog::StatsCatalog;
use crate::domain::stats::{
    FranceStats, HistoricEvent, HostCountry, OverviewStats, TopSport, YearMedals, YearSummary,
};
use anyhow::Result;

pub struct StaticStats {
    france_series: Vec<YearMedals>,
    usa_series: Vec<YearMedals>,
    global_series: Vec<YearMedals>,
}

impl StaticStats {
    pub fn new() -> Self {
        Self {
            france_series: vec![
                YearMedals { year: 1896, gold: 5, silver: 4, bronze: 2 },
                YearMedals { year: 1900, gold: 26, silver: 41, bronze: 34 },
                YearMedals { year: 1904, gold: 0, silver: 0, bronze: 0 },
                YearMedals { year: 1924, gold: 13, silver: 15, bronze: 10 },
                YearMedals { year: 1948, gold: 10, silver: 6, bronze: 13 },
                YearMedals { year: 1968, gold: 7, silver: 3, bronze: 5 },
                YearMedals { year: 1996, gold: 15, silver: 7, bronze: 15 },
                YearMedals { year: 2008, gold: 7, silver: 16, bronze: 20 },
                YearMedals { year: 2016, gold: 10, silver: 18, bronze: 14 },
                YearMedals { year: 2020, gold: 10, silver: 12, bronze: 11 },
            ],
            usa_series: vec![
                YearMedals { year: 1896, gold: 11, silver: 7, bronze: 2 },
                YearMedals { year: 1904, gold: 78, silver: 82, bronze: 79 },
                YearMedals { year: 1984, gold: 83, silver: 61, bronze: 30 },
                YearMedals { year: 1996, gold: 44, silver: 32, bronze: 25 },
                YearMedals { year: 2008, gold: 36, silver: 39, bronze: 37 },
                YearMedals { year: 2016, gold: 46, silver: 37, bronze: 38 },
                YearMedals { year: 2020, gold: 39, silver: 41, bronze: 33 },
            ],
            global_series: vec![
                YearMedals { year: 1896, gold: 62, silver: 43, bronze: 40 },
                YearMedals { year: 1900, gold: 85, silver: 88, bronze: 82 },
                YearMedals { year: 1924, gold: 126, silver: 126, bronze: 116 },
                YearMedals { year: 1960, gold: 152, silver: 145, bronze: 154 },
                YearMedals { year: 1988, gold: 241, silver: 234, bronze: 264 },
                YearMedals { year: 2000, gold: 301, silver: 299, bronze: 327 },
                YearMedals { year: 2008, gold: 302, silver: 303, bronze: 353 },
                YearMedals { year: 2016, gold: 307, silver: 307, bronze: 359 },
                YearMedals { year: 2020, gold: 340, silver: 338, bronze: 402 },
            ],
        }
    }
}

impl Default for StaticStats {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StatsCatalog for StaticStats {
    async fn overview(&self) -> Result<OverviewStats> {
        Ok(OverviewStats {
            total_medals: 21_000,
            total_athletes: 74_000,
            total_countries: 206,
            total_events: 162_000,
        })
    }

    async fn france(&self) -> Result<FranceStats> {
        Ok(FranceStats {
            total_medals: 840,
            gold: 248,
            silver: 276,
            bronze: 316,
            best_year: YearSummary { year: 1900, medals: 101 },
            worst_year: YearSummary { year: 1904, medals: 0 },
        })
    }

    async fn medals_by_year(&self, country: Option<&str>) -> Result<Vec<YearMedals>> {
        let series = match country.map(str::to_uppercase).as_deref() {
            Some("FRA") => &self.france_series,
            Some("USA") => &self.usa_series,
            _ => &self.global_series,
        };
        Ok(series.clone())
    }

    async fn top_sports(&self) -> Result<Vec<TopSport>> {
        Ok(vec![
            TopSport { sport: "Athletics".to_string(), medals: 150, percentage: 17.9 },
            TopSport { sport: "Swimming".to_string(), medals: 85, percentage: 10.1 },
            TopSport { sport: "Fencing".to_string(), medals: 118, percentage: 14.0 },
            TopSport { sport: "Cycling".to_string(), medals: 92, percentage: 11.0 },
            TopSport { sport: "Judo".to_string(), medals: 55, percentage: 6.5 },
        ])
    }

    async fn host_countries(&self) -> Result<Vec<HostCountry>> {
        Ok(vec![
            HostCountry {
                country: "USA".to_string(),
                count: 8,
                cities: vec![
                    "Los Angeles".to_string(),
                    "Atlanta".to_string(),
                    "Salt Lake City".to_string(),
                ],
            },
            HostCountry {
                country: "France".to_string(),
                count: 6,
                cities: vec![
                    "Paris".to_string(),
                    "Chamonix".to_string(),
                    "Grenoble".to_string(),
                    "Albertville".to_string(),
                ],
            },
            HostCountry {
                country: "UK".to_string(),
                count: 3,
                cities: vec!["London".to_string()],
            },
            HostCountry {
                country: "Japan".to_string(),
                count: 4,
                cities: vec![
                    "Tokyo".to_string(),
                    "Sapporo".to_string(),
                    "Nagano".to_string(),
                ],
            },
        ])
    }

    async fn historic_events(&self) -> Result<Vec<HistoricEvent>> {
        Ok(vec![
            HistoricEvent {
                id: 1,
                year: 1924,
                title: "First Winter Games in Chamonix".to_string(),
                description: "Birth of the Winter Olympic Games".to_string(),
                verified: true,
            },
            HistoricEvent {
                id: 2,
                year: 1900,
                title: "Women join the Games".to_string(),
                description: "Women competed for the first time, at the Paris Games".to_string(),
                verified: true,
            },
            HistoricEvent {
                id: 3,
                year: 2012,
                title: "Gender milestone".to_string(),
                description: "Every participating country sent female athletes".to_string(),
                verified: true,
            },
        ])
    }
}
