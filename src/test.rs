extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, body: &str) -> Result<String, Box<dyn std::error::Error>> {
        let path = dir.join(name);
        fs::write(&path, body)?;
        Ok(path.to_string_lossy().into_owned())
    }

    // logs go in one temp dir, results/ in the working dir of the command
    fn aggregate_setup() -> Result<(TempDir, TempDir), Box<dyn std::error::Error>> {
        let logs = tempfile::tempdir()?;
        let work = tempfile::tempdir()?;
        fs::create_dir(work.path().join("results"))?;
        Ok((logs, work))
    }

    #[test]
    fn aggregate_scenario() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, work) = aggregate_setup()?;
        let f10 = write_file(
            logs.path(),
            "plain_foo_10.txt",
            "softmax plain elapsed time: 0.10s\nsoftmax plain elapsed time: 0.20s\nsoftmax plain elapsed time: 0.30s\n",
        )?;
        let f20 = write_file(logs.path(), "plain_foo_20.txt", "softmax plain elapsed time: 1.00s\n")?;

        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .args([&f20, &f10])
            .assert()
            .success();

        assert_eq!(fs::read_to_string(work.path().join("results/plain.csv"))?, "elements,time\n10,0.2\n20,1\n");
        assert_eq!(fs::read_to_string(work.path().join("results/auto.csv"))?, "elements,time\n");
        assert_eq!(fs::read_to_string(work.path().join("results/avx.csv"))?, "elements,time\n");
        Ok(())
    }

    #[test]
    fn aggregate_all_variants_with_table() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, work) = aggregate_setup()?;
        let mut args = vec![];
        for (alg, n, t) in [("avx", 2048, "0.004s"), ("avx", 1024, "0.002s"), ("auto", 1024, "0.003s"), ("plain", 1024, "0.008s")] {
            let body = format!("a b c d {}\n\na b c d {}\n", t, t);
            args.push(write_file(logs.path(), &format!("{}_softmax_{}.txt", alg, n), &body)?);
        }
        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .arg("-t")
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::contains("algorithm").and(predicate::str::contains("2048")));

        assert_eq!(fs::read_to_string(work.path().join("results/avx.csv"))?, "elements,time\n1024,0.002\n2048,0.004\n");
        assert_eq!(fs::read_to_string(work.path().join("results/auto.csv"))?, "elements,time\n1024,0.003\n");
        assert_eq!(fs::read_to_string(work.path().join("results/plain.csv"))?, "elements,time\n1024,0.008\n");
        Ok(())
    }

    #[test]
    fn aggregate_out_dir_option() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, work) = aggregate_setup()?;
        let f = write_file(logs.path(), "auto_x_5.txt", "a b c d 2s\n")?;
        let out = work.path().join("elsewhere");
        fs::create_dir(&out)?;
        Command::cargo_bin("aggregate")?
            .args(["-o", out.to_string_lossy().as_ref(), f.as_str()])
            .assert()
            .success();
        assert_eq!(fs::read_to_string(out.join("auto.csv"))?, "elements,time\n5,2\n");
        Ok(())
    }

    #[test]
    fn aggregate_unknown_tag_fails() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, work) = aggregate_setup()?;
        let f = write_file(logs.path(), "sse_foo_10.txt", "a b c d 1s\n")?;
        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .arg(&f)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::starts_with("error:").and(predicate::str::contains("sse")));
        Ok(())
    }

    #[test]
    fn aggregate_bad_duration_names_line() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, work) = aggregate_setup()?;
        let f = write_file(logs.path(), "plain_foo_10.txt", "a b c d 1s\na b c d ???\n")?;
        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .arg(&f)
            .assert()
            .failure()
            .stderr(predicate::str::contains("plain_foo_10.txt").and(predicate::str::contains("line 2")));
        Ok(())
    }

    #[test]
    fn aggregate_missing_results_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
        let logs = tempfile::tempdir()?;
        let work = tempfile::tempdir()?;
        let f = write_file(logs.path(), "plain_foo_10.txt", "a b c d 1s\n")?;
        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .arg(&f)
            .assert()
            .failure()
            .stderr(predicate::str::contains("io error"));
        Ok(())
    }

    #[test]
    fn aggregate_missing_input_fails() -> Result<(), Box<dyn std::error::Error>> {
        let (_logs, work) = aggregate_setup()?;
        Command::cargo_bin("aggregate")?
            .current_dir(work.path())
            .arg("plain_nothere_10.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("plain_nothere_10.txt"));
        Ok(())
    }

    fn trial_dir(per_bucket: usize) -> Result<TempDir, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        for threads in [1u32, 2, 4, 8, 16, 32] {
            for i in 0..per_bucket {
                let body = format!("{} workers time: {:.6}\nprimes: 82025\n", threads, 8.0 / threads as f64);
                fs::write(dir.path().join(format!("primes_{}_{}.txt", threads, i)), body)?;
            }
        }
        Ok(dir)
    }

    #[test]
    fn collect_writes_svg() -> Result<(), Box<dyn std::error::Error>> {
        let logs = trial_dir(10)?;
        let work = tempfile::tempdir()?;
        Command::cargo_bin("collect_output")?
            .current_dir(work.path())
            .arg(logs.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("warning").not());
        let svg = fs::read_to_string(work.path().join("times.svg"))?;
        assert!(svg.contains("<svg"));
        Ok(())
    }

    #[test]
    fn collect_table_shows_means() -> Result<(), Box<dyn std::error::Error>> {
        let logs = tempfile::tempdir()?;
        for i in 0..10 {
            fs::write(logs.path().join(format!("t{}.txt", i)), "4 x y 2.5\naux\n")?;
        }
        let work = tempfile::tempdir()?;
        let out = work.path().join("scaling.svg");
        Command::cargo_bin("collect_output")?
            .arg(logs.path())
            .args(["-o", out.to_string_lossy().as_ref(), "-t"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"(?m)^\s*4[\s|]+10[\s|]+2\.5\s*$")?)
            // only bucket 4 has trials, the other five are short
            .stderr(predicate::str::contains("warning").count(5));
        assert!(out.exists());
        Ok(())
    }

    #[test]
    fn collect_observed_divisor() -> Result<(), Box<dyn std::error::Error>> {
        let logs = trial_dir(3)?;
        let work = tempfile::tempdir()?;
        Command::cargo_bin("collect_output")?
            .current_dir(work.path())
            .arg(logs.path())
            .args(["--observed", "-t"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"(?m)^\s*1[\s|]+3[\s|]+8\s*$")?)
            .stderr(predicate::str::contains("warning").not());
        Ok(())
    }

    #[test]
    fn collect_bad_bucket_fails() -> Result<(), Box<dyn std::error::Error>> {
        let logs = tempfile::tempdir()?;
        fs::write(logs.path().join("t.txt"), "12 workers time: 1.0\n")?;
        let work = tempfile::tempdir()?;
        Command::cargo_bin("collect_output")?
            .current_dir(work.path())
            .arg(logs.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unknown key \"12\""));
        assert!(!work.path().join("times.svg").exists());
        Ok(())
    }

    #[test]
    fn collect_missing_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
        let work = tempfile::tempdir()?;
        Command::cargo_bin("collect_output")?
            .current_dir(work.path())
            .arg("no_such_dir")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no_such_dir"));
        Ok(())
    }

    #[test]
    fn collect_rejects_zero_trials() -> Result<(), Box<dyn std::error::Error>> {
        let logs = trial_dir(1)?;
        Command::cargo_bin("collect_output")?
            .arg(logs.path())
            .args(["--trials", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--trials"));
        Ok(())
    }

    #[test]
    fn version_has_revision() -> Result<(), Box<dyn std::error::Error>> {
        Command::cargo_bin("aggregate")?
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("rev:"));
        Ok(())
    }
}
