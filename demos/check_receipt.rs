use std::io;

use pushover::{AppToken, CheckReceipt, PushoverClient, ReceiptId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PUSHOVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_TOKEN environment variable is required",
        )
    })?;
    let receipt = std::env::var("PUSHOVER_RECEIPT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_RECEIPT environment variable is required",
        )
    })?;

    let client = PushoverClient::new();
    let request = CheckReceipt::with_token(ReceiptId::new(receipt)?, AppToken::new(token)?);
    let response = client.check_receipt(request).await?;

    println!(
        "receipt: {}, acknowledged: {} (at {:?}), expired: {} (at {:?}), called back: {}",
        response.receipt.as_str(),
        response.acknowledged,
        response.acknowledged_at,
        response.expired,
        response.expires_at,
        response.called_back,
    );

    Ok(())
}
