use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use learnlive_cli::admin::{NewAdmin, check_credentials, create_admin};
use learnlive_cli::seeder::{self, SeedConfig};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "learnlive-cli")]
#[command(about = "Administrative tools for the LearnLive API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an administrator account
    CreateAdmin(AdminArgs),
    /// Fill the database with fake groups, subjects, rooms, professors and students
    Seed(SeedArgs),
    /// Remove everything the seeder created
    ClearSeed,
}

/// Anything left out is prompted for.
#[derive(Args)]
struct AdminArgs {
    /// Login name (English letters and digits, at least 3)
    #[arg(short, long)]
    username: Option<String>,

    #[arg(short, long)]
    first_name: Option<String>,

    #[arg(short, long)]
    last_name: Option<String>,

    /// YYYY-MM-DD
    #[arg(short, long)]
    birthdate: Option<NaiveDate>,

    /// Prompted without echo when omitted
    #[arg(short, long)]
    password: Option<String>,
}

#[derive(Args)]
struct SeedArgs {
    /// Study groups to create
    #[arg(short, long, default_value_t = 4)]
    groups: usize,

    /// Subjects to create
    #[arg(short, long, default_value_t = 8)]
    subjects: usize,

    /// Subjects in each group's program
    #[arg(long, default_value_t = 4)]
    subjects_per_group: usize,

    #[arg(long, default_value_t = 6)]
    professors: usize,

    /// Students in each group
    #[arg(long, default_value_t = 20)]
    students: usize,

    /// Video rooms per subject
    #[arg(long, default_value_t = 2)]
    rooms: usize,
}

impl From<SeedArgs> for SeedConfig {
    fn from(args: SeedArgs) -> Self {
        SeedConfig::new(args.groups)
            .with_subjects(args.subjects, args.subjects_per_group)
            .with_professors(args.professors)
            .with_students(args.students)
            .with_rooms(args.rooms)
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let outcome = match cli.command {
        Command::CreateAdmin(args) => run_create_admin(&pool, args).await,
        Command::Seed(args) => seeder::seed_all(&pool, args.into()).await,
        Command::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ {e}");
        std::process::exit(1);
    }
}

fn prompt(value: Option<String>, label: &str) -> String {
    value.unwrap_or_else(|| {
        Input::new()
            .with_prompt(label)
            .interact_text()
            .unwrap_or_else(|e| panic!("Failed to read {label}: {e}"))
    })
}

async fn run_create_admin(pool: &PgPool, args: AdminArgs) -> Result<(), Box<dyn std::error::Error>> {
    let username = prompt(args.username, "Username");
    let first_name = prompt(args.first_name, "First name");
    let last_name = prompt(args.last_name, "Last name");

    let birthdate = match args.birthdate {
        Some(date) => date,
        None => Input::<NaiveDate>::new()
            .with_prompt("Birthdate (YYYY-MM-DD)")
            .interact_text()?,
    };

    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .validate_with(|input: &String| check_credentials(&username, input))
            .interact()?,
    };

    let admin = NewAdmin {
        username,
        password,
        first_name,
        last_name,
        birthdate,
    };
    let id = create_admin(pool, &admin).await?;

    println!("\n✅ Administrator created");
    println!("   Username: {}", admin.username);
    println!("   Name: {} {}", admin.first_name, admin.last_name);
    println!("   ID: {id}");
    Ok(())
}
