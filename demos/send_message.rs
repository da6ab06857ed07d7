use std::io;

use pushover::{
    AppToken, DefaultsUpdate, MessageText, PushoverClient, SendMessage, SendOptions, UserKey,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PUSHOVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_TOKEN environment variable is required",
        )
    })?;
    let user = std::env::var("PUSHOVER_USER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_USER environment variable is required",
        )
    })?;
    let message = std::env::var("PUSHOVER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the pushover demo.".to_owned());

    let client = PushoverClient::new();
    client.set_defaults(
        DefaultsUpdate::new()
            .token(AppToken::new(token)?)
            .user(UserKey::new(user)?),
    )?;

    let request = SendMessage::new(MessageText::new(message)?, SendOptions::default());
    let response = client.send_message(request).await?;
    println!(
        "status: {:?}, request: {:?}, receipt: {:?}",
        response.status, response.request, response.receipt
    );

    Ok(())
}
