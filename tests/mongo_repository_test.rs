//! Runs against a live MongoDB configured through MONGO_URL / DB_NAME.
//! Ignored by default: `cargo test -- --ignored` to include it.

use alumni_network_backend::config::mongo_conf::MongoConfig;
use alumni_network_backend::dto::donation_dto::CreateDonationRequest;
use alumni_network_backend::dto::message_dto::CreateMessageRequest;
use alumni_network_backend::dto::user_dto::{RegisterRequest, UserUpdate};
use alumni_network_backend::model::donation::Donation;
use alumni_network_backend::model::message::Message;
use alumni_network_backend::model::user::User;
use alumni_network_backend::repository::mongo_store::MongoStore;
use alumni_network_backend::repository::Repositories;
use alumni_network_backend::util::clock::new_id;

async fn setup() -> (MongoStore, Repositories) {
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env().expect("mongo config");
    let store = MongoStore::connect(&config).await.expect("mongo store");
    let repos = Repositories::mongo(&store);
    (store, repos)
}

#[tokio::test]
#[ignore]
async fn test_user_repository_workflow() {
    let (store, repos) = setup().await;

    let email = format!("{}@test.com", new_id());
    let user = User::from_request(RegisterRequest {
        full_name: "Repo Test".to_string(),
        email: email.clone(),
        password: "TestPass123!".to_string(),
        university: None,
        passout_year: 2019,
        location: "Boston, MA".to_string(),
        company: "Acme".to_string(),
        domain: "Finance".to_string(),
        phone: "555".to_string(),
        profile_picture: None,
    });
    let inserted = repos.users.insert(user).await.expect("insert user");

    let by_email = repos.users.find_by_email(&email).await.expect("find by email");
    assert_eq!(by_email.map(|u| u.id), Some(inserted.id.clone()));

    let by_credentials = repos
        .users
        .find_by_credentials(&email, "wrong")
        .await
        .expect("find by credentials");
    assert!(by_credentials.is_none());

    let update = UserUpdate {
        company: Some("Acme 2".to_string()),
        ..Default::default()
    };
    repos.users.update_profile(&inserted.id, &update).await.expect("update");
    // re-applying the same values still matches the user
    repos.users.update_profile(&inserted.id, &update).await.expect("update again");
    assert!(repos.users.update_profile(&new_id(), &update).await.is_err());

    repos.users.add_registered_event(&inserted.id, "evt1").await.expect("add event");
    repos.users.add_registered_event(&inserted.id, "evt1").await.expect("add event again");

    let donation = Donation::from_request(CreateDonationRequest {
        user_id: inserted.id.clone(),
        name: "Repo Test".to_string(),
        email: email.clone(),
        phone: "555".to_string(),
        amount: 42.0,
        purpose: "Library".to_string(),
        message: None,
    });
    let donation = repos.donations.insert(donation).await.expect("insert donation");
    repos.users.push_donation(&inserted.id, &donation).await.expect("push donation");

    let stored = repos.users.find_by_id(&inserted.id).await.expect("find").expect("user exists");
    assert_eq!(stored.company, "Acme 2");
    assert_eq!(stored.registered_events, vec!["evt1".to_string()]);
    assert_eq!(stored.donations, vec![donation]);

    assert!(repos.users.count().await.expect("count users") >= 1);
    assert!(repos.donations.count().await.expect("count donations") >= 1);

    store.shutdown().await;
}

#[tokio::test]
#[ignore]
async fn test_message_repository_conversation() {
    let (store, repos) = setup().await;
    let a = new_id();
    let b = new_id();
    let c = new_id();

    for (from, to, text) in [(&a, &b, "one"), (&b, &a, "two"), (&a, &c, "other")] {
        repos
            .messages
            .insert(Message::from_request(CreateMessageRequest {
                sender_id: from.clone(),
                receiver_id: to.clone(),
                message: text.to_string(),
            }))
            .await
            .expect("insert message");
        // distinct timestamps keep the expected order deterministic
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let conversation = repos
        .messages
        .list_conversation(&a, &b, 1000)
        .await
        .expect("list conversation");
    let texts: Vec<&str> = conversation.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);

    store.shutdown().await;
}
