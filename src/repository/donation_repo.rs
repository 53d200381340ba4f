use async_trait::async_trait;
use mongodb::Collection;
use tracing::{error, info, instrument};

use crate::model::donation::Donation;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn insert(&self, donation: Donation) -> RepositoryResult<Donation>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoDonationRepository {
    collection: Collection<Donation>,
}

impl MongoDonationRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoDonationRepository {
            collection: store.collection::<Donation>("donations"),
        }
    }
}

#[async_trait]
impl DonationRepository for MongoDonationRepository {
    #[instrument(skip(self, donation), fields(donation_id = %donation.id, amount = donation.amount))]
    async fn insert(&self, donation: Donation) -> RepositoryResult<Donation> {
        self.collection.insert_one(&donation, None).await.map_err(|e| {
            error!("Failed to store donation: {}", e);
            e
        })?;
        info!("Donation stored");
        Ok(donation)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let count = self.collection.count_documents(None, None).await?;
        info!("Total donations count: {}", count);
        Ok(count)
    }
}
