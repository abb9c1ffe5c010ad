use jwkeys::FetchKeyMap;
use jwkeys::JwksFetcher;
use jwkeys::JwksFetcherConfig;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Example 1: Decode a JWK set that is already in memory
    println!("=== Example 1: In-process JWKS ===");
    let body = br#"{
        "jwks": [
            { "kty": "EC", "kid": "ec-1", "crv": "P-256",
              "x": "f83OJ3D2xF1Bg8vub9tLe1gHMzV76e8Tus9uPHvRVEU",
              "y": "x_FEzRu9m36HLN_tue659LNpXW6pCyStikYjKIWI5a0" }
        ]
    }"#;

    match jwkeys::parse_ecdsa_key_map(body) {
        Ok(keys) => {
            for (kid, key) in &keys {
                println!("✓ {kid}: curve {}, algorithm {:?}", key.curve, key.algorithm());
            }
        }
        Err(e) => eprintln!("✗ Decoding failed: {e}"),
    }

    println!();

    // Example 2: Fetch an RSA key set from an endpoint
    println!("=== Example 2: Remote JWKS ===");
    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://your-issuer.example.com/jwks".to_string());

    let config = JwksFetcherConfig::new().with_timeout(Duration::from_secs(10));
    let fetcher = JwksFetcher::new(config)?;

    match fetcher.fetch_rsa_key_map(&endpoint).await {
        Ok(keys) => {
            for (kid, key) in &keys {
                println!(
                    "✓ {kid}: {}-bit modulus, exponent {}",
                    key.modulus.bits(),
                    key.exponent
                );
            }
        }
        Err(e) => eprintln!("✗ Fetch failed: {e}"),
    }

    Ok(())
}
