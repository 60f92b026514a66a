//! Demo data seeder for GymLedger development.
//!
//! Seeds three gyms with trainers and a year of ledger entries, then prints
//! bearer tokens for an admin and for each gym owner.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Months, NaiveDate};
use gymledger_core::ledger::EntryKind;
use gymledger_core::roster::Trainer;
use gymledger_core::source::TenantDirectory;
use gymledger_core::tenant::Tenant;
use gymledger_db::repositories::{CreateLedgerEntryInput, CreateTrainerInput};
use gymledger_db::{GymRepository, LedgerRepository, TrainerRepository, connect};
use gymledger_shared::types::{Money, UserId};
use gymledger_shared::{AppConfig, JwtService, Role};

/// Gym name, monthly membership income, monthly rent.
const GYMS: [(&str, i64, i64); 3] = [
    ("Downtown", 120_000, 30_000),
    ("Harbor", 90_000, 22_000),
    ("Uptown", 60_000, 18_000),
];

/// Trainer name, contact, configured salary.
const TRAINERS: [(&str, &str, Option<i64>); 3] = [
    ("Alex Putra", "alex@gymledger.dev", Some(32_000)),
    ("Sari Dewi", "0812-5550-0101", None),
    ("Budi Santoso", "budi@gymledger.dev", None),
];

/// Number of months of ledger history to seed.
const MONTHS: u32 = 12;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    let gyms = GymRepository::new(db.clone());
    let trainers = TrainerRepository::new(db.clone());
    let ledger = LedgerRepository::new(db);

    let existing = gyms.list_tenants().await?;
    let tenants = if existing.is_empty() {
        seed(&gyms, &trainers, &ledger, config.ledger.default_salary()).await?
    } else {
        println!("  Gyms already exist, skipping data...");
        existing
    };

    print_tokens(&JwtService::new(&config.jwt), &tenants)?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed(
    gyms: &GymRepository,
    trainers: &TrainerRepository,
    ledger: &LedgerRepository,
    default_salary: Money,
) -> anyhow::Result<Vec<Tenant>> {
    let first_month = NaiveDate::from_ymd_opt(2024, 1, 1).context("Invalid start date")?;
    let mut tenants = Vec::with_capacity(GYMS.len());

    for (gym_index, (name, membership, rent)) in GYMS.into_iter().enumerate() {
        println!("Seeding gym {name}...");
        let tenant = gyms.create(name, None).await?;

        let mut roster = Vec::new();
        // Each gym gets one more trainer than the previous one.
        for (name, contact, salary) in TRAINERS.into_iter().take(gym_index + 1) {
            let trainer = trainers
                .create(CreateTrainerInput {
                    tenant_id: tenant.id,
                    name: name.to_string(),
                    contact: contact.to_string(),
                    salary: salary.map(Money::from_units),
                    joined_at: first_month,
                })
                .await?;
            roster.push(trainer);
        }

        // The newest trainer of a gym with several has not been paid yet.
        let paid = match roster.split_last() {
            Some((_, earlier)) if !earlier.is_empty() => earlier,
            _ => roster.as_slice(),
        };

        for month in 0..MONTHS {
            let month_start = first_month
                .checked_add_months(Months::new(month))
                .context("Month out of range")?;
            let month_end = last_day_of_month(month_start)?;

            record(
                ledger,
                &tenant,
                month_start,
                EntryKind::Income,
                "Membership",
                Money::from_units(membership),
                None,
            )
            .await?;
            record(
                ledger,
                &tenant,
                month_start,
                EntryKind::Expense,
                "Rent",
                Money::from_units(rent),
                None,
            )
            .await?;

            for trainer in paid {
                let salary = trainer.configured_salary.unwrap_or(default_salary);
                record(
                    ledger,
                    &tenant,
                    month_end,
                    EntryKind::Expense,
                    "Salary",
                    salary,
                    Some(trainer),
                )
                .await?;
            }
        }

        tenants.push(tenant);
    }

    Ok(tenants)
}

async fn record(
    ledger: &LedgerRepository,
    tenant: &Tenant,
    date: NaiveDate,
    kind: EntryKind,
    category: &str,
    amount: Money,
    trainer: Option<&Trainer>,
) -> anyhow::Result<()> {
    let description = match trainer {
        Some(trainer) => format!("{category} {} {}", trainer.name, date.format("%B %Y")),
        None => format!("{category} {}", date.format("%B %Y")),
    };

    ledger
        .create(CreateLedgerEntryInput {
            tenant_id: tenant.id,
            date,
            kind,
            category: category.to_string(),
            amount,
            description,
            trainer_id: trainer.map(|t| t.id),
        })
        .await?;
    Ok(())
}

fn last_day_of_month(month_start: NaiveDate) -> anyhow::Result<NaiveDate> {
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .filter(|end| end.month() == month_start.month())
        .context("Month out of range")
}

fn print_tokens(jwt: &JwtService, tenants: &[Tenant]) -> anyhow::Result<()> {
    println!();
    println!("Development tokens (valid {}s):", jwt.access_token_expires_in());

    let admin = jwt.generate_access_token(UserId::new(), Role::Admin, None)?;
    println!("  admin: {admin}");

    for tenant in tenants {
        let owner = jwt.generate_access_token(UserId::new(), Role::GymOwner, Some(tenant.id))?;
        println!("  owner of {} ({}): {owner}", tenant.name, tenant.id);
    }

    println!();
    Ok(())
}
