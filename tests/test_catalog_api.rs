//! End-to-end HTTP tests: each test spawns the real router on an ephemeral
//! port with its own temporary SQLite file and drives it over the wire.

use car_store::{transport, CatalogService};
use serde_json::{json, Value};
use std::time::Duration;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    // Held so the database file outlives the server.
    _db_dir: tempfile::TempDir,
}

async fn spawn_server() -> Result<TestServer, Box<dyn std::error::Error>> {
    let db_dir = tempfile::tempdir()?;
    let catalog = CatalogService::connect(&db_dir.path().join("catalog.db")).await?;
    let state = transport::http::AppState { catalog };
    let router = transport::http::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(TestServer {
        base_url: format!("http://{}", addr),
        client,
        _db_dir: db_dir,
    })
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create_brand(&self, name: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/brands"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        resp.json().await.unwrap()
    }

    async fn create_car(&self, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url("/cars"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        resp.json().await.unwrap()
    }
}

#[tokio::test]
async fn test_health() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let resp = server.client.get(server.url("/health")).send().await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_brand_crud() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let brand = server.create_brand("Audi").await;
    let id = brand["id"].as_i64().unwrap();
    assert_eq!(brand["name"], "Audi");

    let brands: Vec<Value> = server
        .client
        .get(server.url("/brands"))
        .send()
        .await?
        .json()
        .await?;
    assert!(brands.iter().any(|b| b["name"] == "Audi"));

    let resp = server
        .client
        .get(server.url(&format!("/brands/{}", id)))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);

    // Rename applies.
    let resp = server
        .client
        .patch(server.url(&format!("/brands/{}", id)))
        .json(&json!({ "name": "Audi AG" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let renamed: Value = resp.json().await?;
    assert_eq!(renamed["name"], "Audi AG");

    // Empty-string rename is a no-op.
    let resp = server
        .client
        .patch(server.url(&format!("/brands/{}", id)))
        .json(&json!({ "name": "" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let unchanged: Value = resp.json().await?;
    assert_eq!(unchanged["name"], "Audi AG");

    let resp = server
        .client
        .delete(server.url(&format!("/brands/{}", id)))
        .send()
        .await?;
    assert_eq!(resp.status(), 204);

    let resp = server
        .client
        .get(server.url(&format!("/brands/{}", id)))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "Brand not found");
    Ok(())
}

#[tokio::test]
async fn test_client_supplied_ids_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let resp = server
        .client
        .post(server.url("/brands"))
        .json(&json!({ "id": 999, "name": "Rover" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let brand: Value = resp.json().await?;
    assert!(brand["id"].as_i64().is_some());
    assert_ne!(brand["id"].as_i64().unwrap(), 999);

    let resp = server
        .client
        .post(server.url("/cars"))
        .json(&json!({ "id": 999, "name": "Defender", "price": 60000 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let car: Value = resp.json().await?;
    assert_ne!(car["id"].as_i64().unwrap(), 999);

    // Ids are unique across the collection.
    let other = server.create_brand("MG").await;
    assert_ne!(other["id"], brand["id"]);
    Ok(())
}

#[tokio::test]
async fn test_create_car_with_unknown_brand_persists_nothing(
) -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let resp = server
        .client
        .post(server.url("/cars"))
        .json(&json!({ "name": "Ghost", "price": 1, "brand_id": 9999 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "brand_id does not exist");

    let cars: Vec<Value> = server
        .client
        .get(server.url("/cars"))
        .send()
        .await?
        .json()
        .await?;
    assert!(cars.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_car_patch_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let brand = server.create_brand("Tesla").await;
    let brand_id = brand["id"].as_i64().unwrap();
    let car = server
        .create_car(json!({ "name": "Model 3", "price": 39999, "brand_id": brand_id }))
        .await;
    let car_id = car["id"].as_i64().unwrap();
    let car_url = server.url(&format!("/cars/{}", car_id));

    // A one-field patch leaves every other field untouched.
    let resp = server
        .client
        .patch(&car_url)
        .json(&json!({ "price": 36000 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let patched: Value = resp.json().await?;
    assert_eq!(patched["price"].as_f64().unwrap(), 36000.0);
    assert_eq!(patched["name"], "Model 3");
    assert_eq!(patched["brand_id"].as_i64().unwrap(), brand_id);

    // price 0 is present, so it applies (presence, not truthiness).
    let resp = server
        .client
        .patch(&car_url)
        .json(&json!({ "price": 0 }))
        .send()
        .await?;
    let patched: Value = resp.json().await?;
    assert_eq!(patched["price"].as_f64().unwrap(), 0.0);

    // Empty-string name is a no-op; null brand_id means "no change".
    let resp = server
        .client
        .patch(&car_url)
        .json(&json!({ "name": "", "brand_id": null }))
        .send()
        .await?;
    let patched: Value = resp.json().await?;
    assert_eq!(patched["name"], "Model 3");
    assert_eq!(patched["brand_id"].as_i64().unwrap(), brand_id);

    // Re-pointing at a non-existent brand fails and changes nothing.
    let resp = server
        .client
        .patch(&car_url)
        .json(&json!({ "brand_id": 9999, "name": "Mangled" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let current: Value = server.client.get(&car_url).send().await?.json().await?;
    assert_eq!(current["name"], "Model 3");
    assert_eq!(current["brand_id"].as_i64().unwrap(), brand_id);

    // Patching a missing car is a 404, not a validation error.
    let resp = server
        .client
        .patch(server.url("/cars/424242"))
        .json(&json!({ "brand_id": 9999 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_car_filters() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let bmw = server.create_brand("BMW").await;
    let tesla = server.create_brand("Tesla").await;
    let bmw_id = bmw["id"].as_i64().unwrap();
    let tesla_id = tesla["id"].as_i64().unwrap();

    server
        .create_car(json!({ "name": "Model 3", "price": 39999, "brand_id": tesla_id }))
        .await;
    server
        .create_car(json!({ "name": "Model Y", "price": 49999, "brand_id": tesla_id }))
        .await;
    server
        .create_car(json!({ "name": "320i", "price": 29999, "brand_id": bmw_id }))
        .await;

    let list = |query: &str| {
        let url = server.url(&format!("/cars?{}", query));
        let client = server.client.clone();
        async move {
            let cars: Vec<Value> = client.get(url).send().await.unwrap().json().await.unwrap();
            cars
        }
    };

    // Empty filter set returns everything.
    assert_eq!(list("").await.len(), 3);

    // Substring match is case-insensitive.
    let cars = list("q=model").await;
    assert_eq!(cars.len(), 2);
    let cars = list("q=MODEL%203").await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["name"], "Model 3");

    // Price bounds are inclusive on both ends.
    let cars = list("min_price=39999&max_price=39999").await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["name"], "Model 3");

    // Predicates are conjoined: brand matches, price range does not.
    let cars = list(&format!("brand_id={}&max_price=10000", tesla_id)).await;
    assert!(cars.is_empty());

    let cars = list(&format!("brand_id={}", bmw_id)).await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["name"], "320i");

    // Pagination is deterministic: page 1 + page 2 = full list, in id order.
    let all = list("").await;
    let page1 = list("limit=2&offset=0").await;
    let page2 = list("limit=2&offset=2").await;
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);
    assert_eq!(page1[0]["id"], all[0]["id"]);
    assert_eq!(page1[1]["id"], all[1]["id"]);
    assert_eq!(page2[0]["id"], all[2]["id"]);

    // limit=0 clamps up to 1, oversized limits clamp down to 100.
    assert_eq!(list("limit=0").await.len(), 1);
    assert_eq!(list("limit=5000").await.len(), 3);

    // Negative price bounds are rejected as bad input.
    let resp = server
        .client
        .get(server.url("/cars?min_price=-1"))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test]
async fn test_delete_brand_nullifies_its_cars() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let brand = server.create_brand("Saab").await;
    let brand_id = brand["id"].as_i64().unwrap();
    let car = server
        .create_car(json!({ "name": "9-3", "price": 12000, "brand_id": brand_id }))
        .await;
    let car_id = car["id"].as_i64().unwrap();

    let resp = server
        .client
        .delete(server.url(&format!("/brands/{}", brand_id)))
        .send()
        .await?;
    assert_eq!(resp.status(), 204);

    // The car survives, but no longer references the deleted brand.
    let car: Value = server
        .client
        .get(server.url(&format!("/cars/{}", car_id)))
        .send()
        .await?
        .json()
        .await?;
    assert!(car["brand_id"].is_null());
    Ok(())
}

// The full walk-through: brand -> car -> patch -> filtered list -> delete.
#[tokio::test]
async fn test_catalog_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;

    let brand = server.create_brand("Audi").await;
    let brand_id = brand["id"].as_i64().unwrap();

    let car = server
        .create_car(json!({ "name": "A4", "price": 35000, "brand_id": brand_id }))
        .await;
    let car_id = car["id"].as_i64().unwrap();
    let car_url = server.url(&format!("/cars/{}", car_id));

    let resp = server
        .client
        .patch(&car_url)
        .json(&json!({ "price": 36000 }))
        .send()
        .await?;
    let patched: Value = resp.json().await?;
    assert_eq!(patched["price"].as_f64().unwrap(), 36000.0);
    assert_eq!(patched["name"], "A4");
    assert_eq!(patched["brand_id"].as_i64().unwrap(), brand_id);

    // Lowercase q matches the uppercase name.
    let cars: Vec<Value> = server
        .client
        .get(server.url("/cars?q=a4&min_price=30000&max_price=40000"))
        .send()
        .await?
        .json()
        .await?;
    assert!(cars.iter().any(|c| c["id"].as_i64() == Some(car_id)));

    let resp = server.client.delete(&car_url).send().await?;
    assert_eq!(resp.status(), 204);

    let resp = server.client.get(&car_url).send().await?;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "Car not found");
    Ok(())
}
