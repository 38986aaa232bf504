//! In-memory port implementations for handler tests.
//!
//! `InMemoryHerd` applies committed plans to its own state, so multi-step
//! scenarios (inseminate, confirm, calve) read their own writes.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::cattle::{
    Animal, Bull, CalvingPlan, CattleRole, CattleVitals, Cow, Insemination, InseminationPlan,
    InseminationStatus, SireRef, StatusUpdatePlan,
};
use crate::domain::foundation::{
    AnimalId, BullId, CowId, DateWindow, DomainError, ErrorCode, FarmId, InseminationId,
};
use crate::domain::notification::Notification;
use crate::ports::{
    Clock, CowRecord, HerdReader, HerdRepository, NotificationStore, StoredNotification,
    VitalsRepository,
};

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Default)]
pub struct InMemoryHerd {
    pub cows: Mutex<Vec<Cow>>,
    pub animals: Mutex<Vec<Animal>>,
    pub bulls: Mutex<Vec<Bull>>,
    pub inseminations: Mutex<Vec<Insemination>>,
    pub committed_inseminations: Mutex<Vec<InseminationPlan>>,
    pub committed_status_updates: Mutex<Vec<StatusUpdatePlan>>,
    pub committed_calvings: Mutex<Vec<CalvingPlan>>,
    pub fail_commits: bool,
}

impl InMemoryHerd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_commits: true,
            ..Self::default()
        }
    }

    pub fn add_cow(&self, cow: Cow) {
        self.cows.lock().unwrap().push(cow);
    }

    pub fn add_animal(&self, animal: Animal) {
        self.animals.lock().unwrap().push(animal);
    }

    pub fn add_bull(&self, bull: Bull) {
        self.bulls.lock().unwrap().push(bull);
    }

    pub fn add_insemination(&self, record: Insemination) {
        self.inseminations.lock().unwrap().push(record);
    }

    pub fn cow_by_id(&self, id: &CowId) -> Option<Cow> {
        self.cows.lock().unwrap().iter().find(|c| c.id == *id).cloned()
    }

    pub fn animal_by_id(&self, id: &AnimalId) -> Option<Animal> {
        self.animals.lock().unwrap().iter().find(|a| a.id() == id).cloned()
    }

    fn animal_owning_cow(&self, cow_id: &CowId) -> Option<Animal> {
        self.animals
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.cow_id() == Some(*cow_id))
            .cloned()
    }

    fn latest_for(&self, cow_id: &CowId) -> Option<Insemination> {
        self.inseminations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.cow_id == *cow_id)
            .max_by_key(|r| (r.insemination_date, r.created_at))
            .cloned()
    }

    fn latest_with_status(
        &self,
        cow_id: &CowId,
        status: InseminationStatus,
    ) -> Option<Insemination> {
        self.inseminations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.cow_id == *cow_id && r.status == status)
            .max_by_key(|r| r.created_at)
            .cloned()
    }

    fn sire_of(&self, record: &Insemination) -> Option<SireRef> {
        let bull_id = record.bull_id?;
        let animals = self.animals.lock().unwrap();
        let animal = animals.iter().find(|a| a.bull_id() == Some(bull_id))?;
        Some(SireRef {
            bull_id,
            tag_number: animal.tag_number().to_string(),
            name: animal.name().map(String::from),
        })
    }

    fn record_for(&self, cow: &Cow) -> CowRecord {
        let latest = self.latest_for(&cow.id);
        let sire = latest.as_ref().and_then(|r| self.sire_of(r));
        CowRecord {
            cow: cow.clone(),
            animal: self.animal_owning_cow(&cow.id),
            latest_insemination: latest,
            latest_sire: sire,
        }
    }

    fn farm_of_cow(&self, cow_id: &CowId) -> Option<FarmId> {
        self.animal_owning_cow(cow_id).map(|a| *a.farm_id())
    }

    fn guard(&self) -> Result<(), DomainError> {
        if self.fail_commits {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated commit failure",
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HerdReader for InMemoryHerd {
    async fn cow(&self, id: &CowId) -> Result<Option<Cow>, DomainError> {
        Ok(self.cow_by_id(id))
    }

    async fn animal_for_cow(&self, id: &CowId) -> Result<Option<Animal>, DomainError> {
        Ok(self.animal_owning_cow(id))
    }

    async fn animal(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError> {
        Ok(self.animal_by_id(id))
    }

    async fn bull(&self, id: &BullId) -> Result<Option<Bull>, DomainError> {
        Ok(self.bulls.lock().unwrap().iter().find(|b| b.id == *id).cloned())
    }

    async fn cows_in_final_month(
        &self,
        window: DateWindow,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError> {
        let cows: Vec<Cow> = self.cows.lock().unwrap().clone();
        Ok(cows
            .iter()
            .filter(|c| c.last_insemination_date.is_some_and(|d| window.contains(d)))
            .filter(|c| match farm_id {
                Some(farm) => self.farm_of_cow(&c.id).as_ref() == Some(farm),
                None => true,
            })
            .map(|c| self.record_for(c))
            .collect())
    }

    async fn breeding_eligible_cows(
        &self,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError> {
        let cows: Vec<Cow> = self.cows.lock().unwrap().clone();
        Ok(cows
            .iter()
            .filter(|c| c.is_open_for_breeding())
            .filter(|c| match farm_id {
                Some(farm) => self.farm_of_cow(&c.id).as_ref() == Some(farm),
                None => true,
            })
            .map(|c| self.record_for(c))
            .collect())
    }

    async fn insemination(&self, id: &InseminationId) -> Result<Option<Insemination>, DomainError> {
        Ok(self
            .inseminations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn latest_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        Ok(self.latest_for(cow_id))
    }

    async fn latest_pending_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        Ok(self.latest_with_status(cow_id, InseminationStatus::Pending))
    }

    async fn latest_confirmed_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        Ok(self.latest_with_status(cow_id, InseminationStatus::Confirmed))
    }

    async fn confirmed_insemination_on(
        &self,
        cow_id: &CowId,
        date: NaiveDate,
    ) -> Result<Option<Insemination>, DomainError> {
        Ok(self
            .inseminations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.cow_id == *cow_id
                    && r.status == InseminationStatus::Confirmed
                    && r.insemination_date == date
            })
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn bull_animal(
        &self,
        bull_id: &BullId,
        farm_id: &FarmId,
    ) -> Result<Option<Animal>, DomainError> {
        Ok(self
            .animals
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.bull_id() == Some(*bull_id) && a.farm_id() == farm_id)
            .cloned())
    }

    async fn farm_ids(&self) -> Result<Vec<FarmId>, DomainError> {
        let mut ids: Vec<FarmId> = Vec::new();
        for animal in self.animals.lock().unwrap().iter() {
            if !ids.contains(animal.farm_id()) {
                ids.push(*animal.farm_id());
            }
        }
        Ok(ids)
    }
}

#[async_trait]
impl HerdRepository for InMemoryHerd {
    async fn commit_insemination(&self, plan: &InseminationPlan) -> Result<(), DomainError> {
        self.guard()?;
        if let Some(demotion) = &plan.demote {
            let mut records = self.inseminations.lock().unwrap();
            if let Some(record) = records.iter_mut().find(|r| r.id == demotion.insemination_id) {
                record.status = InseminationStatus::NeedsRepeat;
                record.notes = Some(demotion.notes.clone());
            }
        }
        self.inseminations.lock().unwrap().push(Insemination {
            id: plan.record.id,
            cow_id: plan.record.cow_id,
            animal_id: plan.record.animal_id,
            insemination_date: plan.record.insemination_date,
            status: plan.record.status,
            bull_id: plan.record.bull_id,
            notes: plan.record.notes.clone(),
            performed_by: plan.record.performed_by.clone(),
            created_at: Utc::now(),
        });
        self.committed_inseminations.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn commit_status_update(&self, plan: &StatusUpdatePlan) -> Result<(), DomainError> {
        self.guard()?;
        {
            let mut records = self.inseminations.lock().unwrap();
            if let Some(record) = records.iter_mut().find(|r| r.id == plan.insemination_id) {
                record.status = plan.status;
                if plan.notes.is_some() {
                    record.notes = plan.notes.clone();
                }
            }
        }
        if let Some(pregnancy) = &plan.pregnancy {
            let mut cows = self.cows.lock().unwrap();
            if let Some(cow) = cows.iter_mut().find(|c| c.id == pregnancy.cow_id) {
                cow.last_insemination_date = Some(pregnancy.last_insemination_date);
                cow.expected_calving_date = Some(pregnancy.expected_calving_date);
            }
        }
        self.committed_status_updates.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn commit_calving(&self, plan: &CalvingPlan) -> Result<(), DomainError> {
        self.guard()?;
        {
            let mut cows = self.cows.lock().unwrap();
            if let Some(cow) = cows.iter_mut().find(|c| c.id == plan.cow_id) {
                cow.last_calving_date = Some(plan.calving_date);
                cow.actual_calving_date = Some(plan.calving_date);
                cow.last_insemination_date = None;
                cow.expected_calving_date = None;
            }
        }
        for calf in &plan.calves {
            match calf.role {
                CattleRole::Bull(id) => self.add_bull(Bull::new(id)),
                CattleRole::Cow(id) => self.add_cow(Cow::new(id)),
            }
            let mut animal = Animal::reconstitute(
                calf.animal_id,
                calf.tag_number.clone(),
                calf.farm_id,
                calf.kind,
                calf.name.clone(),
                Some(calf.date_of_birth),
                Some(calf.mother_id),
                calf.father_id,
                crate::domain::cattle::AnimalDetail::Cattle(calf.role),
                true,
            );
            animal.set_parents(Some(calf.mother_id), calf.father_id);
            self.add_animal(animal);
        }
        if let Some(animal_id) = plan.promote_animal {
            let mut animals = self.animals.lock().unwrap();
            if let Some(animal) = animals.iter_mut().find(|a| *a.id() == animal_id) {
                animal.promote_heifer_to_cow();
            }
        }
        self.committed_calvings.lock().unwrap().push(plan.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNotifications {
    pub stored: Mutex<Vec<StoredNotification>>,
}

impl InMemoryNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<StoredNotification> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotifications {
    async fn existing_keys(&self, farm_id: &FarmId) -> Result<HashSet<String>, DomainError> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.farm_id == *farm_id)
            .map(|s| s.notification.dedup_key())
            .collect())
    }

    async fn save(
        &self,
        farm_id: &FarmId,
        notification: &Notification,
    ) -> Result<(), DomainError> {
        self.stored.lock().unwrap().push(StoredNotification {
            id: Uuid::new_v4(),
            farm_id: *farm_id,
            notification: notification.clone(),
            read_at: None,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn unread(&self, farm_id: &FarmId) -> Result<Vec<StoredNotification>, DomainError> {
        let mut unread: Vec<StoredNotification> = self
            .stored
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.farm_id == *farm_id && s.read_at.is_none())
            .cloned()
            .collect();
        unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(unread)
    }

    async fn unread_count(&self, farm_id: &FarmId) -> Result<u64, DomainError> {
        Ok(self.unread(farm_id).await?.len() as u64)
    }

    async fn mark_read(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut stored = self.stored.lock().unwrap();
        if let Some(entry) = stored.iter_mut().find(|s| s.id == *id) {
            entry.read_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryVitals {
    pub records: Mutex<Vec<CattleVitals>>,
}

impl InMemoryVitals {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VitalsRepository for InMemoryVitals {
    async fn record(&self, vitals: &CattleVitals) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(vitals.clone());
        Ok(())
    }

    async fn recent_for_animal(
        &self,
        animal_id: &AnimalId,
        limit: u32,
    ) -> Result<Vec<CattleVitals>, DomainError> {
        let mut matching: Vec<CattleVitals> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.animal_id == *animal_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.checked_at.cmp(&a.checked_at));
        matching.truncate(limit as usize);
        Ok(matching)
    }
}
