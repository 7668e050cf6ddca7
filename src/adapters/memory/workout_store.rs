//! In-memory workout store.
//!
//! Implements every persistence port over a single `RwLock`, so each write
//! (check-then-insert on start, session end plus recommendation upsert)
//! runs inside one critical section. Used when no database is configured
//! and throughout the test suite. Data does not survive restarts.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId, WorkoutSessionId};
use crate::domain::recommendation::Recommendation;
use crate::domain::user::{email_taken, NewUser, User};
use crate::domain::workout::{
    active_session_exists, not_active, owner_not_found, session_not_found,
    NewWorkoutSession, WorkoutSession,
};
use crate::ports::{
    Page, PageRequest, RecommendationReader, RecommendationSnapshot, SortOrder, StatusFilter,
    UserListOptions, UserReader, UserRepository, UserSortField, UserSummary, WorkoutCounts,
    WorkoutListOptions, WorkoutSessionReader, WorkoutSessionRepository, WorkoutSortField,
};

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<UserId, User>,
    sessions: BTreeMap<WorkoutSessionId, WorkoutSession>,
    recommendations: HashMap<UserId, Recommendation>,
    next_user_id: i64,
    next_session_id: i64,
}

impl State {
    fn active_session_for(&self, user_id: UserId) -> Option<&WorkoutSession> {
        self.sessions
            .values()
            .find(|s| s.user_id() == user_id && s.is_active())
    }

    fn sessions_of(&self, user_id: UserId) -> impl Iterator<Item = &WorkoutSession> {
        self.sessions.values().filter(move |s| s.user_id() == user_id)
    }

    fn ended_sessions_of(&self, user_id: UserId) -> impl Iterator<Item = &WorkoutSession> {
        self.sessions_of(user_id).filter(|s| !s.is_active())
    }

    fn last_ended(&self, user_id: UserId) -> Option<&WorkoutSession> {
        self.ended_sessions_of(user_id).max_by(|a, b| {
            a.ended_at()
                .cmp(&b.ended_at())
                .then_with(|| a.id().cmp(&b.id()))
        })
    }

    fn first_ended(&self, user_id: UserId) -> Option<&WorkoutSession> {
        self.ended_sessions_of(user_id).min_by(|a, b| {
            a.started_at()
                .cmp(b.started_at())
                .then_with(|| a.id().cmp(&b.id()))
        })
    }

    /// Looks up a stored session that must still be active.
    fn active_stored(&self, id: WorkoutSessionId) -> Result<&WorkoutSession, DomainError> {
        let stored = self.sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        if stored.is_active() {
            Ok(stored)
        } else {
            Err(not_active(id))
        }
    }
}

/// In-memory implementation of all workout persistence ports.
///
/// Cheap to clone; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryWorkoutStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_users(a: &User, b: &User, field: UserSortField) -> Ordering {
    let primary = match field {
        UserSortField::CreatedAt => a.created_at().cmp(b.created_at()),
        UserSortField::Name => a.name().cmp(b.name()),
        UserSortField::Id => Ordering::Equal,
    };
    primary.then_with(|| a.id().cmp(&b.id()))
}

fn compare_sessions(
    a: &WorkoutSession,
    b: &WorkoutSession,
    field: WorkoutSortField,
    order: SortOrder,
) -> Ordering {
    match field {
        WorkoutSortField::StartedAt => directed(
            a.started_at()
                .cmp(b.started_at())
                .then_with(|| a.id().cmp(&b.id())),
            order,
        ),
        WorkoutSortField::Id => directed(a.id().cmp(&b.id()), order),
        // Sessions still running have no end time and always sort last.
        WorkoutSortField::EndedAt => match (a.ended_at(), b.ended_at()) {
            (Some(x), Some(y)) => directed(x.cmp(y).then_with(|| a.id().cmp(&b.id())), order),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => directed(a.id().cmp(&b.id()), order),
        },
    }
}

fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let page_items = items
        .into_iter()
        .skip(offset)
        .take(request.limit() as usize)
        .collect();
    Page::new(page_items, total, request)
}

#[async_trait]
impl UserRepository for InMemoryWorkoutStore {
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if let Some(email) = new_user.email() {
            if state.users.values().any(|u| u.email() == Some(email)) {
                return Err(email_taken(email));
            }
        }

        state.next_user_id += 1;
        let user = new_user.clone().into_user(UserId::new(state.next_user_id));
        state.users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.state.read().await.users.contains_key(&id))
    }
}

#[async_trait]
impl UserReader for InMemoryWorkoutStore {
    async fn list(&self, options: &UserListOptions) -> Result<Page<UserSummary>, DomainError> {
        let state = self.state.read().await;

        let mut users: Vec<&User> = state.users.values().collect();
        users.sort_by(|a, b| directed(compare_users(a, b, options.sort_by), options.order));

        let summaries = users
            .into_iter()
            .map(|user| UserSummary {
                user: user.clone(),
                total_workouts: state.sessions_of(user.id()).count() as u64,
            })
            .collect();
        Ok(paginate(summaries, options.page))
    }
}

#[async_trait]
impl WorkoutSessionRepository for InMemoryWorkoutStore {
    async fn create(&self, new_session: &NewWorkoutSession) -> Result<WorkoutSession, DomainError> {
        let mut state = self.state.write().await;

        let user_id = new_session.user_id();
        if !state.users.contains_key(&user_id) {
            return Err(owner_not_found(user_id));
        }
        if let Some(active) = state.active_session_for(user_id) {
            return Err(active_session_exists(user_id, Some(active.id())));
        }

        state.next_session_id += 1;
        let session = new_session
            .clone()
            .into_session(WorkoutSessionId::new(state.next_session_id));
        state.sessions.insert(session.id(), session.clone());
        Ok(session)
    }

    async fn find_by_id(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        Ok(self.state.read().await.sessions.get(&id).cloned())
    }

    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        Ok(self.state.read().await.active_session_for(user_id).cloned())
    }

    async fn record_log(&self, session: &WorkoutSession) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.active_stored(session.id())?;
        state.sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn end_session(
        &self,
        id: WorkoutSessionId,
        ended_at: Timestamp,
    ) -> Result<(WorkoutSession, Recommendation), DomainError> {
        let mut state = self.state.write().await;
        let mut session = state
            .sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| session_not_found(id))?;

        let recommendation = session.end(ended_at)?;
        state.sessions.insert(id, session.clone());
        state
            .recommendations
            .insert(recommendation.user_id(), recommendation.clone());
        Ok((session, recommendation))
    }
}

#[async_trait]
impl WorkoutSessionReader for InMemoryWorkoutStore {
    async fn list_by_user(
        &self,
        user_id: UserId,
        options: &WorkoutListOptions,
    ) -> Result<Page<WorkoutSession>, DomainError> {
        let state = self.state.read().await;

        let mut sessions: Vec<WorkoutSession> = state
            .sessions_of(user_id)
            .filter(|s| match options.status {
                StatusFilter::Active => s.is_active(),
                StatusFilter::Ended => !s.is_active(),
                StatusFilter::All => true,
            })
            .cloned()
            .collect();
        sessions.sort_by(|a, b| compare_sessions(a, b, options.sort_by, options.order));

        Ok(paginate(sessions, options.page))
    }

    async fn counts(&self, user_id: UserId) -> Result<WorkoutCounts, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .sessions_of(user_id)
            .fold(WorkoutCounts::default(), |mut counts, s| {
                counts.total += 1;
                if s.is_logged() {
                    counts.logged += 1;
                }
                if s.is_active() {
                    counts.active += 1;
                } else {
                    counts.ended += 1;
                }
                counts
            }))
    }
}

#[async_trait]
impl RecommendationReader for InMemoryWorkoutStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Recommendation>, DomainError> {
        Ok(self.state.read().await.recommendations.get(&user_id).cloned())
    }

    async fn snapshot(
        &self,
        user_id: UserId,
    ) -> Result<Option<RecommendationSnapshot>, DomainError> {
        let state = self.state.read().await;
        if !state.users.contains_key(&user_id) {
            return Ok(None);
        }

        Ok(Some(RecommendationSnapshot {
            recommendation: state.recommendations.get(&user_id).cloned(),
            last_ended: state.last_ended(user_id).cloned(),
            first_ended: state.first_ended(user_id).cloned(),
            ended_count: state.ended_sessions_of(user_id).count() as u64,
        }))
    }
}
