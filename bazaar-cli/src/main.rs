use anyhow::{Context, Result};
use bazaar_client::BazaarClient;
use bazaar_core::models::Session;
use bazaar_core::TimeWindow;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (falls back to BAZAAR_SERVER, then localhost)
    #[arg(short, long)]
    server: Option<String>,

    /// Where to keep the saved session (default: ~/.bazaar_session)
    #[arg(long)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    CreateUser {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Login and save the session
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Remove the saved session
    Logout,

    /// Show the saved session
    Status,

    /// List recent listings
    Listings {
        /// How many trailing days to cover
        #[arg(short, long, default_value_t = 30)]
        days: i64,
    },

    /// Create a listing
    CreateListing {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        price: f64,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Update an owned listing
    UpdateListing {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        price: Option<f64>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Deactivate an owned listing
    DeleteListing {
        #[arg(short, long)]
        id: i64,
    },

    /// Attach a photo URL to an owned listing
    AddPhoto {
        #[arg(short, long)]
        listing_id: i64,

        #[arg(short, long)]
        url: String,
    },

    /// Remove a photo from an owned listing
    DeletePhoto {
        #[arg(short, long)]
        photo_id: i64,
    },

    /// Update username and/or profile picture
    UpdateUser {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(long)]
        profile_picture_url: Option<String>,
    },
}

struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    fn new(custom_path: Option<PathBuf>) -> Result<Self> {
        let session_path = match custom_path {
            Some(path) => path,
            None => {
                let home = dirs::home_dir().context("Failed to get home directory")?;
                home.join(".bazaar_session")
            }
        };

        Ok(Self { session_path })
    }

    fn save(&self, session: &Session) -> Result<()> {
        let body = serde_json::to_string_pretty(session)?;
        fs::write(&self.session_path, body)
            .with_context(|| format!("Failed to save session to {:?}", self.session_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms)?;
        }

        println!("✓ Session saved to {:?}", self.session_path);
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        match fs::read_to_string(&self.session_path) {
            Ok(body) => {
                let session: Session =
                    serde_json::from_str(&body).context("Failed to parse session file")?;
                Ok(Some(session))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("Failed to read session file"),
        }
    }

    fn clear(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .with_context(|| format!("Failed to remove session file {:?}", self.session_path))?;
            println!("✓ Session file removed");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("BAZAAR_SERVER").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    println!("🔌 Backend: {}", server);

    let client = BazaarClient::new(server);

    let store = SessionStore::new(cli.session_file)?;
    if let Some(session) = store.load()? {
        client.set_session(session).await;
        println!("🔑 Authenticated with saved session");
    }

    match &cli.command {
        Commands::CreateUser {
            username,
            email,
            password,
        } => {
            println!("📝 Creating account: {}", username);

            match client.create_user(username, email, password).await {
                Ok(response) => {
                    println!("{}", "✅ Account created! You can now log in.".green());
                    if let Some(user_id) = response.user_id {
                        println!("   User ID: {}", user_id);
                    }
                }
                Err(e) => {
                    println!("{}", format!("❌ Account creation failed: {}", e).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Login { email, password } => {
            println!("🔑 Logging in as: {}", email);

            match client.login(email, password).await {
                Ok(session) => {
                    println!("{}", "✅ Login successful!".green());
                    println!("   User ID: {}", session.user_id);
                    println!("   Email: {}", session.email);

                    store.save(&session)?;
                }
                Err(e) => {
                    println!("{}", format!("❌ Login failed: {}", e).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Logout => {
            store.clear()?;
            client.clear_session().await;
            println!("👋 Logged out");
        }

        Commands::Status => match client.session().await {
            Some(session) => {
                println!("🔑 Session file: {:?}", store.session_path);
                println!("   User ID: {}", session.user_id);
                println!("   Email: {}", session.email);
                println!("   Status: ✅ Active");
            }
            None => {
                println!("❌ No session found");
                println!("   Please login first: bazaar-cli login --email <email> --password <password>");
            }
        },

        Commands::Listings { days } => {
            println!("📋 Listings from the last {} days", days);

            let window = TimeWindow::trailing_days(*days);
            match client.get_listings(&window).await {
                Ok(listings) => {
                    println!("✅ Found {} listings", listings.len());
                    println!();

                    if listings.is_empty() {
                        println!("   No listings found");
                    } else {
                        for (i, listing) in listings.iter().enumerate() {
                            println!(
                                "   {}. [{}] {} — ${}",
                                i + 1,
                                listing.listing_id,
                                listing.title,
                                listing.price
                            );
                            println!("      By: {}", listing.user.username);
                            if let Some(created) = &listing.created_at {
                                println!("      Created: {}", created);
                            }
                            if let Some(description) = &listing.description {
                                println!("      About: {}", truncate(description, 50));
                            }
                            if !listing.photos.is_empty() {
                                println!("      Photos: {}", listing.photos.len());
                            }
                            println!();
                        }
                    }
                }
                Err(e) => {
                    println!("{}", format!("❌ Failed to list listings: {}", e).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::CreateListing {
            title,
            price,
            description,
        } => {
            println!("📝 Creating listing: {}", title);

            match client
                .create_listing(title, *price, description.clone())
                .await
            {
                Ok(response) => {
                    println!("{}", "✅ Listing created!".green());
                    if let Some(listing_id) = response.listing_id {
                        println!("   Listing ID: {}", listing_id);
                    }
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        println!("❌ Unauthorized. Please login first:");
                        println!("   bazaar-cli login --email <email> --password <password>");
                    } else {
                        println!("{}", format!("❌ Failed to create listing: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::UpdateListing {
            id,
            title,
            price,
            description,
        } => {
            println!("✏️ Updating listing #{}", id);

            match client
                .update_listing(*id, title.clone(), *price, description.clone())
                .await
            {
                Ok(ack) => {
                    println!("{}", "✅ Listing updated!".green());
                    if let Some(message) = ack.message {
                        println!("   {}", message);
                    }
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Listing #{} not found", id);
                    } else if e.is_unauthorized() {
                        println!("❌ Unauthorized. You may not own this listing or need to login again");
                    } else {
                        println!("{}", format!("❌ Failed to update listing: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::DeleteListing { id } => {
            println!("🗑️ Deactivating listing #{}", id);

            match client.delete_listing(*id).await {
                Ok(_) => {
                    println!("{}", "✅ Listing deactivated!".green());
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Listing #{} not found", id);
                    } else if e.is_unauthorized() {
                        println!("❌ Unauthorized. You may not own this listing or need to login again");
                    } else {
                        println!("{}", format!("❌ Failed to deactivate listing: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::AddPhoto { listing_id, url } => {
            println!("🖼️ Adding photo to listing #{}", listing_id);

            match client.add_photo(*listing_id, url).await {
                Ok(response) => {
                    println!("{}", "✅ Photo added!".green());
                    if let Some(photo_id) = response.photo_id {
                        println!("   Photo ID: {}", photo_id);
                    }
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Listing #{} not found", listing_id);
                    } else if e.is_unauthorized() {
                        println!("❌ Unauthorized. You may not own this listing or need to login again");
                    } else {
                        println!("{}", format!("❌ Failed to add photo: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::DeletePhoto { photo_id } => {
            println!("🗑️ Removing photo #{}", photo_id);

            match client.delete_photo(*photo_id).await {
                Ok(_) => {
                    println!("{}", "✅ Photo removed!".green());
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Photo #{} not found", photo_id);
                    } else if e.is_unauthorized() {
                        println!("❌ Unauthorized. You may not own this photo's listing");
                    } else {
                        println!("{}", format!("❌ Failed to remove photo: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::UpdateUser {
            username,
            profile_picture_url,
        } => {
            println!("✏️ Updating profile");

            match client
                .update_user(username.clone(), profile_picture_url.clone())
                .await
            {
                Ok(ack) => {
                    println!("{}", "✅ Profile updated!".green());
                    if let Some(message) = ack.message {
                        println!("   {}", message);
                    }
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        println!("❌ Unauthorized. Please login first");
                    } else {
                        println!("{}", format!("❌ Failed to update profile: {}", e).red());
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len])
    }
}
