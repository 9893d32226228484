use std::{io::{self, Write}, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use geoshift::{convert, from_str, Bd09, Frame, Gcj02, Wgs84};
use thiserror::Error;

/// Convert a coordinate between WGS-84, GCJ-02 and BD-09
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Frame of the input coordinate (wgs84/gps, gcj02/mars/amap/gaode, bd09/baidu)
    #[arg(long, default_value = "wgs84")]
    from: Frame,

    /// Frame to convert to. Prints every frame if omitted
    #[arg(long)]
    to: Option<Frame>,

    /// Note on stderr when the point is outside the mainland China region
    #[arg(long)]
    warn_outside: bool,

    /// Coordinate as "lng,lat"
    #[arg(allow_hyphen_values = true)]
    point: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Coord(#[from] geoshift::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

// Parse with the point type of the source frame so range errors read the same
// as the library's.
fn parse_point(frame: Frame, value: &str) -> Result<(f64, f64), geoshift::Error> {
    Ok(match frame {
        Frame::Wgs84 => from_str::<_, Wgs84>(value)?.into(),
        Frame::Gcj02 => from_str::<_, Gcj02>(value)?.into(),
        Frame::Bd09 => from_str::<_, Bd09>(value)?.into(),
    })
}

fn format_point(frame: Frame, point: (f64, f64)) -> String {
    match frame {
        Frame::Wgs84 => Wgs84::from(point).to_string(),
        Frame::Gcj02 => Gcj02::from(point).to_string(),
        Frame::Bd09 => Bd09::from(point).to_string(),
    }
}

// BD-09 points meet the gate as GCJ-02 on their way to WGS-84.
fn is_outside_gate(frame: Frame, lng: f64, lat: f64) -> bool {
    let (lng, lat) = if frame.applies_region_gate() {
        (lng, lat)
    } else {
        convert::bd09_to_gcj02(lng, lat)
    };
    convert::is_outside_mainland_china(lng, lat)
}

fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<(), CliError> {
    let (lng, lat) = parse_point(args.from, &args.point)?;

    if args.warn_outside && is_outside_gate(args.from, lng, lat) {
        writeln!(
            err,
            "{} {lng},{lat} is outside mainland China, GCJ-02 conversions leave it unchanged",
            "Note:".yellow().bold()
        )?;
    }

    if let Some(to) = args.to {
        writeln!(out, "{}", format_point(to, args.from.convert(to, lng, lat)))?;
    } else {
        for to in Frame::ALL {
            let point = format_point(to, args.from.convert(to, lng, lat));
            writeln!(out, "{to} ({}): {point}", to.label())?;
        }
    }

    Ok(())
}

fn execute(args: &Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run(args, out, err) {
        Ok(()) => 0,
        Err(e) => {
            // Nothing left to report to if stderr itself fails
            let _ = writeln!(err, "{} {e}", "Error:".red().bold());
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    ExitCode::from(execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(argv: &[&str]) -> (u8, String, String) {
        let args = Args::try_parse_from(std::iter::once("geoshift").chain(argv.iter().copied())).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(&args, &mut out, &mut err);

        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_parse_point_uses_frame_checks() {
        assert_eq!(parse_point(Frame::Wgs84, "116.3912757,39.906217").unwrap(), (116.3912757, 39.906217));
        assert_eq!(parse_point(Frame::Bd09, "-73.98 40.75").unwrap(), (-73.98, 40.75));
        assert!(parse_point(Frame::Gcj02, "200,10").is_err());
        assert!(parse_point(Frame::Bd09, "abc").is_err());
    }

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(Frame::Gcj02, (121.4737, 31.2304)), "121.4737,31.2304");
        assert_eq!(format_point(Frame::Bd09, (-73.985278, 40.748333)), "-73.985278,40.748333");
    }

    #[test]
    fn test_prints_every_frame() {
        let (code, out, err) = invoke(&["116.3912757,39.906217"]);

        assert_eq!(code, 0);
        assert!(err.is_empty(), "{err}");

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "WGS-84 (GPS): 116.3912757,39.906217");
        assert!(lines[1].starts_with("GCJ-02 (Amap/Gaode): 116.397516705"), "{}", lines[1]);
        assert!(lines[2].starts_with("BD-09 (Baidu): 116.403890644"), "{}", lines[2]);
    }

    #[test]
    fn test_single_target() {
        let (code, out, _) = invoke(&["--from", "gps", "--to", "gcj02", "--", "-73.985278,40.748333"]);

        assert_eq!(code, 0);
        assert_eq!(out, "-73.985278,40.748333\n");
    }

    #[test]
    fn test_bad_input_fails() {
        let (code, out, err) = invoke(&["--from", "baidu", "200,10"]);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("Error:"), "{err}");
        assert!(err.contains("Longitude 200 outside of valid range"), "{err}");
    }

    #[test]
    fn test_warn_outside() {
        let (_, _, err) = invoke(&["--warn-outside", "--", "-73.985278,40.748333"]);
        assert!(err.contains("Note:"), "{err}");

        // Checked on the GCJ-02 point a BD-09 input passes through
        let (code, out, err) = invoke(&["--from", "bd09", "--warn-outside", "--", "-73.98,40.75"]);
        assert_eq!(code, 0);
        assert!(err.contains("Note:"), "{err}");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0].split(": ").nth(1), lines[1].split(": ").nth(1));

        let (_, _, err) = invoke(&["--from", "bd09", "--warn-outside", "116.40389064460345,39.91396193389383"]);
        assert!(err.is_empty(), "{err}");

        let (_, _, err) = invoke(&["--", "-73.985278,40.748333"]);
        assert!(err.is_empty(), "{err}");
    }
}
