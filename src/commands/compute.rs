use crate::cli::{CalcCommands, NumberCommands, TimeCommands, UnitCommands};
use crate::services::output::{print_one, print_out};
use crate::services::{calculators, color, datetime, numbers, units};

pub fn handle_number_commands(json: bool, command: &NumberCommands) -> anyhow::Result<()> {
    match command {
        NumberCommands::Base { value, from, to } => match to {
            Some(to) => {
                let report = numbers::convert_base(value, *from, *to)?;
                print_one(json, report, |r| r.output.clone())?;
            }
            None => {
                let report = numbers::all_bases(value, *from)?;
                print_one(json, report, |r| {
                    format!(
                        "dec\t{}\nbin\t{}\noct\t{}\nhex\t{}",
                        r.decimal, r.binary, r.octal, r.hexadecimal
                    )
                })?;
            }
        },
        NumberCommands::Roman { value } => {
            let input_is_number = value.trim().parse::<i64>().is_ok();
            let report = numbers::roman(value)?;
            print_one(json, report, |r| {
                if input_is_number {
                    r.roman.clone()
                } else {
                    r.arabic.to_string()
                }
            })?;
        }
    }
    Ok(())
}

pub fn handle_unit_commands(json: bool, command: &UnitCommands) -> anyhow::Result<()> {
    match command {
        UnitCommands::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let report = units::convert(*quantity, *value, from, to)?;
            print_one(json, report, |r| {
                format!("{} {} = {} {}", r.value, r.from, r.result, r.to)
            })?;
        }
        UnitCommands::List { quantity } => {
            let listing = units::list_units(*quantity);
            print_out(json, &listing, |l| format!("{}\t{}", l.quantity, l.units.join(", ")))?;
        }
    }
    Ok(())
}

pub fn handle_calc_commands(json: bool, command: &CalcCommands) -> anyhow::Result<()> {
    match command {
        CalcCommands::Bmi { weight, height } => {
            let report = calculators::bmi(*weight, *height)?;
            print_one(json, report, |r| format!("{} ({})", r.bmi, r.category))?;
        }
        CalcCommands::Percent { mode, x, y } => {
            let report = calculators::percent(*mode, *x, *y)?;
            print_one(json, report, |r| r.description.clone())?;
        }
        CalcCommands::Loan {
            principal,
            rate,
            months,
        } => {
            let report = calculators::loan(*principal, *rate, *months)?;
            print_one(json, report, |r| {
                format!(
                    "monthly payment\t{:.2}\ntotal paid\t{:.2}\ntotal interest\t{:.2}",
                    r.monthly_payment, r.total_paid, r.total_interest
                )
            })?;
        }
        CalcCommands::Age { birth, on } => {
            let birth = calculators::parse_date(birth)?;
            let on = match on {
                Some(d) => calculators::parse_date(d)?,
                None => chrono::Local::now().date_naive(),
            };
            let report = calculators::age(birth, on)?;
            print_one(json, report, |r| {
                format!(
                    "{} years, {} months, {} days ({} days total)",
                    r.years, r.months, r.days, r.total_days
                )
            })?;
        }
        CalcCommands::DateDiff { from, to } => {
            let report = calculators::date_diff(
                calculators::parse_date(from)?,
                calculators::parse_date(to)?,
            );
            print_one(json, report, |r| format!("{} days", r.days))?;
        }
    }
    Ok(())
}

pub fn handle_time_commands(json: bool, command: &TimeCommands) -> anyhow::Result<()> {
    let report = match command {
        TimeCommands::FromUnix { timestamp } => datetime::from_unix(*timestamp)?,
        TimeCommands::ToUnix { datetime } => datetime::to_unix(datetime)?,
        TimeCommands::Now => datetime::now(),
    };
    let from_unix = matches!(command, TimeCommands::FromUnix { .. });
    print_one(json, report, |r| {
        if from_unix {
            format!("{}\n{}", r.utc, r.rfc3339)
        } else {
            format!("{}\t{}", r.seconds, r.rfc3339)
        }
    })
}

pub fn handle_color(json: bool, value: &str) -> anyhow::Result<()> {
    let report = color::convert(value)?;
    print_one(json, report, |r| format!("{}\n{}\n{}", r.hex, r.rgb, r.hsl))
}
