//! Chat client for the car store.
//!
//! Reads commands from stdin and answers on stdout; every command maps 1:1
//! onto one of the API's read endpoints. Point it at a server with `API_URL`.

use car_store::client::{format_brand, format_car, parse_params, CatalogClient, HELP};
use car_store::infra::config;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let api_url = config::api_url();
    let client = CatalogClient::new(api_url.clone());
    println!("Car store chat client (API: {}).", api_url);
    print!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match command {
            "/start" | "/help" => print!("{}", HELP),
            "/health" => match client.health().await {
                Ok(status) => println!("{}", status),
                Err(e) => println!("API unreachable: {}", e),
            },
            "/brands" => match client.brands().await {
                Ok(brands) if brands.is_empty() => println!("No brands"),
                Ok(brands) => {
                    for b in &brands {
                        println!("{}", format_brand(b));
                    }
                }
                Err(e) => println!("Request failed: {}", e),
            },
            "/cars" => {
                let params = parse_params(&args);
                match client.cars(&params).await {
                    Ok(cars) if cars.is_empty() => println!("No cars matched"),
                    Ok(cars) => {
                        for c in cars.iter().take(20) {
                            println!("{}", format_car(c));
                        }
                    }
                    Err(e) => println!("Request failed: {}", e),
                }
            }
            "/car" => {
                let Some(arg) = args.first() else {
                    println!("An id is required, e.g.: /car 1");
                    continue;
                };
                let Ok(id) = arg.parse::<i64>() else {
                    println!("id must be a number");
                    continue;
                };
                match client.car(id).await {
                    Ok(Some(car)) => println!("{}", format_car(&car)),
                    Ok(None) => println!("Not found"),
                    Err(e) => println!("Request failed: {}", e),
                }
            }
            _ => println!("Unknown command. {}", HELP),
        }
    }

    Ok(())
}
