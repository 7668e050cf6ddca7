//! ListUsersHandler - Query handler for paginated user listings.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::user::UserError;
use crate::ports::{Page, UserListOptions, UserReader, UserSummary};

/// Query to list users.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub options: UserListOptions,
}

/// Handler for listing users.
pub struct ListUsersHandler {
    reader: Arc<dyn UserReader>,
}

impl ListUsersHandler {
    pub fn new(reader: Arc<dyn UserReader>) -> Self {
        Self { reader }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, query: ListUsersQuery) -> Result<Page<UserSummary>, UserError> {
        Ok(self.reader.list(&query.options).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::NewUser;
    use crate::ports::{PageRequest, SortOrder, UserRepository, UserSortField};

    #[tokio::test]
    async fn pages_through_users() {
        let store = Arc::new(InMemoryWorkoutStore::new());
        for (i, name) in ["Ada", "Bob", "Cy"].iter().enumerate() {
            UserRepository::create(
                store.as_ref(),
                &NewUser::new(name, None, Timestamp::now().plus_secs(i as u64)).unwrap(),
            )
            .await
            .unwrap();
        }
        let handler = ListUsersHandler::new(store);

        let page = handler
            .handle(ListUsersQuery {
                options: UserListOptions {
                    page: PageRequest::new(Some(2), Some(2)),
                    sort_by: UserSortField::Id,
                    order: SortOrder::Asc,
                },
            })
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].user.name(), "Cy");
    }

    #[tokio::test]
    async fn default_order_is_newest_first() {
        let store = Arc::new(InMemoryWorkoutStore::new());
        let now = Timestamp::now();
        UserRepository::create(store.as_ref(), &NewUser::new("Old", None, now).unwrap())
            .await
            .unwrap();
        UserRepository::create(
            store.as_ref(),
            &NewUser::new("New", None, now.plus_secs(5)).unwrap(),
        )
        .await
        .unwrap();

        let page = ListUsersHandler::new(store)
            .handle(ListUsersQuery::default())
            .await
            .unwrap();
        assert_eq!(page.items[0].user.name(), "New");
    }
}
