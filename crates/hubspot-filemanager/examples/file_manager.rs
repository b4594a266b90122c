//! File Manager walkthrough
//!
//! Creates a folder, uploads a file into it, lists the folder contents and
//! then cleans up again.
//!
//! ## Prerequisites
//!
//! One of these environment variables (a `.env` file works too):
//! - `HUBSPOT_ACCESS_TOKEN`: private app or OAuth token
//! - `HUBSPOT_API_KEY`: legacy developer API key
//!
//! ## Usage
//!
//! ```bash
//! HUBSPOT_ACCESS_TOKEN=pat-na1-... cargo run --example file_manager --features trace -- ./logo.png
//! ```

use hubspot_filemanager::{
    Client,
    types::{FileListParams, UploadParams},
};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubspot_filemanager=debug".into()),
        )
        .init();

    let Some(local_path) = std::env::args().nth(1) else {
        eprintln!("usage: file_manager <path-to-upload>");
        std::process::exit(2);
    };

    let client = Client::from_env()?;
    let files = client.files();

    println!("Creating folder...");
    let folder: Value = files
        .create_folder("rust-client-demo", 0)
        .await?
        .error_for_status()?
        .json()?;
    let folder_id = folder["id"].as_i64().ok_or("folder response has no id")?;
    println!("  created folder {folder_id}");

    println!("Uploading {local_path}...");
    let uploaded: Value = files
        .upload(
            &local_path,
            UploadParams::new()
                .overwrite(true)
                .folder_path("/rust-client-demo"),
        )
        .await?
        .error_for_status()?
        .json()?;
    let file_id = uploaded["objects"][0]["id"]
        .as_i64()
        .ok_or("upload response has no file id")?;
    println!("  uploaded file {file_id}");

    println!("Listing folder contents...");
    let listing: Value = files
        .list(FileListParams::new().folder_id(folder_id).limit(20))
        .await?
        .error_for_status()?
        .json()?;
    for file in listing["objects"].as_array().into_iter().flatten() {
        println!("  {} ({})", file["name"], file["id"]);
    }

    println!("Cleaning up...");
    files.delete(file_id).await?.error_for_status()?;
    files.delete_folder(folder_id).await?.error_for_status()?;
    println!("Done");

    Ok(())
}
