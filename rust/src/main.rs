use std::env;
use std::io::{self, Write};
use std::process;

use chrono::NaiveDate;
use cnp::{Cnp, CnpGen, Region, Sex, describe_cnp, parse_cnp, validate_cnp};
use serde_json::json;

#[derive(Debug, Clone)]
struct GenerateOpts {
    count: usize,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self { count: 1 }
    }
}

fn print_help() {
    eprintln!(
        "cnpgen - Romanian CNP generator CLI\n\n\
Usage:\n  cnpgen new\n  cnpgen generate [--count <n>]\n  cnpgen validate <cnp>\n  cnpgen parse <cnp> [--json]\n  cnpgen info <cnp>... [--json]\n  cnpgen healthcheck [--json]\n  cnpgen --version\n\n\
The new command runs an interactive wizard.\nFor generate, --count 0 streams identifiers forever.\n"
    );
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn prompt(label: &str) -> Result<String, String> {
    print!("{label}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

fn parse_sex_answer(raw: &str) -> Result<Sex, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Sex::Male);
    }
    trimmed.parse::<Sex>().map_err(|e| e.to_string())
}

fn parse_serial_answer(raw: &str) -> Result<u16, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }
    trimmed
        .parse::<u16>()
        .map_err(|_| "invalid integer for serial".to_string())
}

fn parse_date_part(raw: &str, field: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid integer for {field}"))
}

fn parse_generate_flags(args: &[String]) -> Result<GenerateOpts, String> {
    let mut opts = GenerateOpts::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --count".to_string());
                }
                opts.count = args[i + 1]
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --count".to_string())?;
                i += 2;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    Ok(opts)
}

fn run_new(args: &[String]) -> Result<(), String> {
    if !args.is_empty() {
        return Err(format!("unknown flag: {}", args[0]));
    }

    println!("New CNP wizard.");
    println!("Please input required information. Defaults are in brackets.");
    println!();

    let resident = is_truthy(&prompt("Resident? [y/N]: ")?);
    let sex = parse_sex_answer(&prompt("Sex? [M]: ")?)?;
    let day = parse_date_part(&prompt("Birth day: ")?, "birth day")?;
    let month = parse_date_part(&prompt("Birth month: ")?, "birth month")?;
    let year = parse_date_part(&prompt("Birth year: ")?, "birth year")?;
    let birth_date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| "invalid birth date".to_string())?;
    let region = prompt("Region: ")?
        .parse::<Region>()
        .map_err(|e| e.to_string())?;
    let serial = parse_serial_answer(&prompt("Order number [1]: ")?)?;

    let cnp = Cnp::new(sex, birth_date, region, serial, resident).map_err(|e| e.to_string())?;
    let full = cnp.full().map_err(|e| e.to_string())?;

    println!();
    println!("RESULT: {full}");
    Ok(())
}

fn run_generate(args: &[String]) -> Result<(), String> {
    let opts = parse_generate_flags(args)?;
    let mut generator = CnpGen::new();
    let mut emitted = 0usize;

    loop {
        if opts.count > 0 && emitted >= opts.count {
            break;
        }
        let full = generator.next_cnp().full().map_err(|e| e.to_string())?;
        println!("{full}");
        io::stdout().flush().map_err(|e| e.to_string())?;
        emitted += 1;
    }

    Ok(())
}

fn run_validate(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("validate requires a CNP".to_string());
    }
    if args.len() > 1 {
        return Err(format!("unknown flag: {}", args[1]));
    }

    let ok = validate_cnp(&args[0]);
    println!("{}", if ok { "true" } else { "false" });
    if ok {
        Ok(())
    } else {
        Err("invalid cnp".to_string())
    }
}

fn run_parse(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("parse requires a CNP".to_string());
    }

    let id = args[0].clone();
    let mut json_out = false;
    for arg in &args[1..] {
        if arg == "--json" {
            json_out = true;
        } else {
            return Err(format!("unknown flag: {arg}"));
        }
    }

    let parsed = parse_cnp(&id).map_err(|e| e.to_string())?;

    if json_out {
        println!(
            "{}",
            serde_json::to_string(&parsed).map_err(|e| e.to_string())?
        );
    } else {
        println!("raw={}", parsed.raw);
        println!("sex={}", parsed.sex);
        println!("birth_date={}", parsed.birth_date);
        println!("region={}", parsed.region);
        println!("serial={}", parsed.serial);
        println!("resident={}", parsed.resident);
    }

    Ok(())
}

fn run_info(args: &[String]) -> Result<(), String> {
    let mut json_out = false;
    let mut ids: Vec<String> = Vec::new();
    for arg in args {
        if arg == "--json" {
            json_out = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown flag: {arg}"));
        } else {
            ids.push(arg.clone());
        }
    }

    if ids.is_empty() {
        return Err("info requires at least one CNP".to_string());
    }

    for (i, id) in ids.iter().enumerate() {
        if json_out {
            let parsed = parse_cnp(id).map_err(|e| e.to_string())?;
            println!(
                "{}",
                serde_json::to_string(&parsed).map_err(|e| e.to_string())?
            );
        } else {
            if i > 0 {
                println!();
            }
            println!("{}", describe_cnp(id).map_err(|e| e.to_string())?);
        }
    }

    Ok(())
}

fn run_healthcheck(args: &[String]) -> Result<(), String> {
    let mut json_mode = false;
    for arg in args {
        if arg == "--json" {
            json_mode = true;
        } else {
            return Err(format!("unknown flag: {arg}"));
        }
    }

    let mut generator = CnpGen::new();
    let sample = generator.next_cnp().full().map_err(|e| e.to_string())?;
    let ok = validate_cnp(&sample);

    if json_mode {
        let payload = json!({
            "ok": ok,
            "sample_cnp": sample,
        });
        println!(
            "{}",
            serde_json::to_string(&payload).map_err(|e| e.to_string())?
        );
    } else {
        println!("ok={} sample={}", if ok { "true" } else { "false" }, sample);
    }

    if ok {
        Ok(())
    } else {
        Err("healthcheck failed".to_string())
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_help();
        process::exit(2);
    }

    if args[0] == "-h" || args[0] == "--help" || args[0] == "help" {
        print_help();
        return;
    }

    if args[0] == "-V" || args[0] == "--version" {
        println!("cnpgen {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let cmd = args[0].as_str();
    let rest = &args[1..];

    let res = match cmd {
        "new" => run_new(rest),
        "generate" => run_generate(rest),
        "validate" => run_validate(rest),
        "parse" => run_parse(rest),
        "info" => run_info(rest),
        "healthcheck" => run_healthcheck(rest),
        _ => Err(format!("unknown command: {}", cmd)),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("y"));
        assert!(is_truthy("Yes"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("1"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("n"));
        assert!(!is_truthy("no"));
    }

    #[test]
    fn test_parse_sex_answer_defaults_to_male() {
        assert_eq!(parse_sex_answer("").unwrap(), Sex::Male);
        assert_eq!(parse_sex_answer("f").unwrap(), Sex::Female);
        assert_eq!(parse_sex_answer(" M ").unwrap(), Sex::Male);
        assert!(parse_sex_answer("q").is_err());
    }

    #[test]
    fn test_parse_serial_answer_defaults_to_one() {
        assert_eq!(parse_serial_answer("").unwrap(), 1);
        assert_eq!(parse_serial_answer("42").unwrap(), 42);
        assert!(parse_serial_answer("abc").is_err());
    }

    #[test]
    fn test_parse_date_part() {
        assert_eq!(parse_date_part("12", "birth month").unwrap(), 12);
        assert!(parse_date_part("twelve", "birth month").is_err());
    }

    #[test]
    fn test_parse_generate_flags() {
        let opts = parse_generate_flags(&[]).unwrap();
        assert_eq!(opts.count, 1);

        let opts = parse_generate_flags(&["--count".to_string(), "10".to_string()]).unwrap();
        assert_eq!(opts.count, 10);

        assert!(parse_generate_flags(&["--count".to_string()]).is_err());
        assert!(parse_generate_flags(&["--bogus".to_string()]).is_err());
    }
}
