use crate::catalog::AthleteCatalog;
use crate::domain::athlete::{
    Athlete, AthleteDetail, AthleteFilter, Legend, MedalBreakdown, OlympicsAppearance,
};
use anyhow::Result;

pub struct StaticAthletes {
    athletes: Vec<Athlete>,
    details: Vec<AthleteDetail>,
    legends: Vec<Legend>,
}

#[allow(clippy::too_many_arguments)]
fn athlete(
    id: i64,
    name: &str,
    country: &str,
    sport: &str,
    gold: i64,
    silver: i64,
    bronze: i64,
    photo: &str,
) -> Athlete {
    Athlete {
        id,
        name: name.to_string(),
        country: country.to_string(),
        sport: sport.to_string(),
        total_medals: gold + silver + bronze,
        gold,
        silver,
        bronze,
        photo: format!("/images/athletes/{photo}.jpg"),
    }
}

fn appearance(year: i32, city: &str, gold: i64, silver: i64, bronze: i64) -> OlympicsAppearance {
    OlympicsAppearance {
        year,
        city: city.to_string(),
        medals: MedalBreakdown { gold, silver, bronze },
    }
}

fn legend(name: &str, country: &str, sport: &str, medals: i64, fact: &str) -> Legend {
    Legend {
        name: name.to_string(),
        country: country.to_string(),
        sport: sport.to_string(),
        medals,
        fact: fact.to_string(),
    }
}

impl StaticAthletes {
    pub fn new() -> Self {
        Self {
            athletes: vec![
                athlete(1, "Michael Phelps", "USA", "Swimming", 23, 3, 2, "phelps"),
                athlete(2, "Usain Bolt", "Jamaica", "Athletics", 8, 0, 0, "bolt"),
                athlete(3, "Larisa Latynina", "Soviet Union", "Gymnastics", 9, 5, 4, "latynina"),
                athlete(4, "Teddy Riner", "France", "Judo", 3, 0, 2, "riner"),
                athlete(5, "Léon Marchand", "France", "Swimming", 4, 0, 0, "marchand"),
                athlete(6, "Simone Biles", "USA", "Gymnastics", 7, 2, 2, "biles"),
                athlete(7, "Katie Ledecky", "USA", "Swimming", 9, 4, 1, "ledecky"),
                athlete(8, "Paavo Nurmi", "Finland", "Athletics", 9, 3, 0, "nurmi"),
                athlete(9, "Carl Lewis", "USA", "Athletics", 9, 1, 0, "lewis"),
                athlete(10, "Birgit Fischer", "Germany", "Canoeing", 8, 4, 0, "fischer"),
            ],
            details: vec![
                AthleteDetail {
                    id: 1,
                    name: "Michael Phelps".to_string(),
                    country: "USA".to_string(),
                    birth_date: "1985-06-30".to_string(),
                    sport: "Swimming".to_string(),
                    height: 193,
                    weight: 91,
                    total_medals: 28,
                    gold: 23,
                    silver: 3,
                    bronze: 2,
                    olympics: vec![
                        appearance(2004, "Athens", 6, 0, 2),
                        appearance(2008, "Beijing", 8, 0, 0),
                        appearance(2012, "London", 4, 2, 0),
                        appearance(2016, "Rio", 5, 1, 0),
                    ],
                    records: vec![
                        "23 Olympic gold medals".to_string(),
                        "8 gold medals at a single Games (2008)".to_string(),
                        "Most decorated Olympian of all time".to_string(),
                    ],
                },
                AthleteDetail {
                    id: 2,
                    name: "Usain Bolt".to_string(),
                    country: "Jamaica".to_string(),
                    birth_date: "1986-08-21".to_string(),
                    sport: "Athletics".to_string(),
                    height: 195,
                    weight: 94,
                    total_medals: 8,
                    gold: 8,
                    silver: 0,
                    bronze: 0,
                    olympics: vec![
                        appearance(2008, "Beijing", 2, 0, 0),
                        appearance(2012, "London", 3, 0, 0),
                        appearance(2016, "Rio", 3, 0, 0),
                    ],
                    records: vec![
                        "100m world record: 9.58s".to_string(),
                        "Only sprinter to win 100m and 200m at three straight Games".to_string(),
                    ],
                },
            ],
            legends: vec![
                legend(
                    "Michael Phelps",
                    "USA",
                    "Swimming",
                    28,
                    "Most decorated Olympian in history",
                ),
                legend(
                    "Johnny Weissmuller",
                    "USA",
                    "Swimming",
                    5,
                    "Went on to play Tarzan in 12 films",
                ),
                legend(
                    "Christa Luding-Rothenburger",
                    "Germany",
                    "Speed Skating / Cycling",
                    6,
                    "Only athlete to medal at the Summer and Winter Games in the same year (1988)",
                ),
            ],
        }
    }
}

impl Default for StaticAthletes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AthleteCatalog for StaticAthletes {
    async fn list(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
        let limit = filter.limit.unwrap_or(AthleteFilter::DEFAULT_LIMIT);
        Ok(self
            .athletes
            .iter()
            .filter(|a| {
                filter
                    .country
                    .as_deref()
                    .is_none_or(|c| a.country.eq_ignore_ascii_case(c))
            })
            .filter(|a| {
                filter
                    .sport
                    .as_deref()
                    .is_none_or(|s| a.sport.eq_ignore_ascii_case(s))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn legends(&self) -> Result<Vec<Legend>> {
        Ok(self.legends.clone())
    }

    async fn detail(&self, id: i64) -> Result<Option<AthleteDetail>> {
        Ok(self.details.iter().find(|d| d.id == id).cloned())
    }
}
