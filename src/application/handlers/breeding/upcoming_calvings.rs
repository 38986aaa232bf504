//! UpcomingCalvingsHandler - Query handler for cows in the final month of
//! gestation.

use std::sync::Arc;

use crate::domain::cattle::{final_month_window, upcoming_calving, BreedingError, UpcomingCalving};
use crate::domain::foundation::FarmId;
use crate::ports::{Clock, HerdReader};

/// Query for the upcoming-calvings listing.
#[derive(Debug, Clone)]
pub struct UpcomingCalvingsQuery {
    /// `None` lists across all farms.
    pub farm_id: Option<FarmId>,
}

/// Handler for the upcoming-calvings listing. Cows without an animal
/// record are excluded silently; results are ordered soonest first.
pub struct UpcomingCalvingsHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl UpcomingCalvingsHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: UpcomingCalvingsQuery,
    ) -> Result<Vec<UpcomingCalving>, BreedingError> {
        let today = self.clock.today();
        let window = final_month_window(today);

        let records = self
            .reader
            .cows_in_final_month(window, query.farm_id.as_ref())
            .await?;

        let mut entries: Vec<UpcomingCalving> = records
            .iter()
            .filter_map(|record| upcoming_calving(&record.cow, record.animal.as_ref(), today))
            .collect();
        entries.sort_by_key(|entry| entry.days_remaining);

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::support::{FixedClock, InMemoryHerd};
    use crate::domain::cattle::{Animal, AnimalDetail, AnimalKind, CattleRole, CattleType, Cow};
    use crate::domain::foundation::{AnimalId, CowId};
    use chrono::{Days, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn handler(herd: Arc<InMemoryHerd>) -> UpcomingCalvingsHandler {
        UpcomingCalvingsHandler::new(herd, Arc::new(FixedClock(today())))
    }

    fn seed_pregnant_cow(herd: &InMemoryHerd, tag: &str, farm_id: FarmId, days_since: u64) -> CowId {
        let mut cow = Cow::new(CowId::new());
        cow.last_insemination_date = Some(today() - Days::new(days_since));
        let cow_id = cow.id;
        let animal = Animal::new(
            AnimalId::new(),
            tag.to_string(),
            farm_id,
            AnimalKind::Cattle(CattleType::Cow),
            AnimalDetail::Cattle(CattleRole::Cow(cow_id)),
        )
        .unwrap();
        herd.add_cow(cow);
        herd.add_animal(animal);
        cow_id
    }

    #[tokio::test]
    async fn lists_cows_in_final_month_soonest_first() {
        let herd = Arc::new(InMemoryHerd::new());
        let farm = FarmId::new();
        seed_pregnant_cow(&herd, "C-1", farm, 260);
        seed_pregnant_cow(&herd, "C-2", farm, 275);
        // 200 days in: still in the 8th month, excluded by the window.
        seed_pregnant_cow(&herd, "C-3", farm, 200);

        let entries = handler(herd)
            .handle(UpcomingCalvingsQuery { farm_id: None })
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag_number, "C-2");
        assert_eq!(entries[0].days_remaining, 8);
        assert_eq!(entries[1].tag_number, "C-1");
        assert_eq!(entries[1].days_remaining, 23);
    }

    #[tokio::test]
    async fn filters_by_farm() {
        let herd = Arc::new(InMemoryHerd::new());
        let farm_a = FarmId::new();
        let farm_b = FarmId::new();
        seed_pregnant_cow(&herd, "A-1", farm_a, 260);
        seed_pregnant_cow(&herd, "B-1", farm_b, 260);

        let entries = handler(herd)
            .handle(UpcomingCalvingsQuery { farm_id: Some(farm_a) })
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag_number, "A-1");
    }

    #[tokio::test]
    async fn cow_without_animal_is_excluded() {
        let herd = Arc::new(InMemoryHerd::new());
        let mut cow = Cow::new(CowId::new());
        cow.last_insemination_date = Some(today() - Days::new(260));
        herd.add_cow(cow);

        let entries = handler(herd)
            .handle(UpcomingCalvingsQuery { farm_id: None })
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
