use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

// a <-> b, b -> c, c <-> d
const INSTANCE: &str = r#"% a small deliberation
arg(a).
arg(b).
arg(c).
arg(d).
att(a,b).
reb(b,a).
und(b,c).
und(c,d).
att(d,c).
"#;

const CHAIN: &str = "arg(a).\narg(b).\narg(c).\natt(a,b).\nreb(b,c).\n";

// s supports b, which is attacked by a
const SUPPORT: &str = "arg(a).\narg(b).\narg(s).\natt(a,b).\nsup(s,b).\n";

fn solve_command(
    instance: &str,
    problem: &str,
    additional_args: &[&str],
) -> Result<(Command, NamedTempFile), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("dialectica")?;
    cmd.arg("solve")
        .arg("--logging-level")
        .arg("off")
        .arg("-f")
        .arg(file.path())
        .arg("-p")
        .arg(problem)
        .args(additional_args);
    Ok((cmd, file))
}

fn test_answer(
    instance: &str,
    problem: &str,
    possible_answers: &[&'static str],
    additional_args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = solve_command(instance, problem, additional_args)?;
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::never());
    for a in possible_answers {
        pred = BoxPredicate::new(pred.or(predicate::eq(*a)));
    }
    cmd.assert().success().stdout(pred);
    file.close()?;
    Ok(())
}

#[test]
fn test_grounded_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(INSTANCE, "SE-GR", &["[]\n"], &[])?;
    test_answer(CHAIN, "SE-GR", &["[a,c]\n"], &[])
}

#[test]
fn test_grounded_ee() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(CHAIN, "EE-GR", &["[[a,c]]\n"], &[])
}

#[test]
fn test_grounded_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(CHAIN, "DC-GR", &["YES\n"], &["-a", "c"])?;
    test_answer(CHAIN, "DS-GR", &["NO\n"], &["-a", "b"])?;
    test_answer(INSTANCE, "DC-GR", &["NO\n"], &["-a", "a"])
}

#[test]
fn test_preferred_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(INSTANCE, "SE-PR", &["[a,c]\n", "[a,d]\n", "[b,d]\n"], &[])
}

#[test]
fn test_preferred_ee() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = solve_command(INSTANCE, "EE-PR", &[])?;
    cmd.assert().success().stdout(
        predicate::str::starts_with("[[")
            .and(predicate::str::ends_with("]]\n"))
            .and(predicate::str::contains("[a,c]"))
            .and(predicate::str::contains("[a,d]"))
            .and(predicate::str::contains("[b,d]"))
            .and(predicate::str::contains("[a]").not()),
    );
    file.close()?;
    Ok(())
}

#[test]
fn test_preferred_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(INSTANCE, "DC-PR", &["YES\n"], &["-a", "a"])?;
    test_answer(INSTANCE, "DS-PR", &["NO\n"], &["-a", "a"])?;
    test_answer(CHAIN, "DS-PR", &["YES\n"], &["-a", "c"])
}

#[test]
fn test_labellings() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(
        INSTANCE,
        "LA-GR",
        &["undec(a).\nundec(b).\nundec(c).\nundec(d).\n"],
        &[],
    )?;
    test_answer(CHAIN, "LA-GR", &["in(a).\nin(c).\nout(b).\n"], &[])?;
    test_answer(CHAIN, "LA-PR", &["in(a).\nin(c).\nout(b).\n"], &[])
}

#[test]
fn test_support_defense() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(SUPPORT, "SE-GR", &["[a,s]\n"], &[])?;
    test_answer(SUPPORT, "SE-GR", &["[b,s]\n"], &["--support-defense"])
}

#[test]
fn test_budget_options() -> Result<(), Box<dyn std::error::Error>> {
    test_answer(
        INSTANCE,
        "SE-PR",
        &["[a,c]\n", "[a,d]\n", "[b,d]\n"],
        &["--max-explore", "1000", "--seed", "7"],
    )
}

#[test]
fn test_missing_argument() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = solve_command(CHAIN, "DC-GR", &[])?;
    cmd.assert().failure();
    file.close()?;
    Ok(())
}

#[test]
fn test_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = solve_command(CHAIN, "DC-GR", &["-a", "z"])?;
    cmd.assert().failure();
    file.close()?;
    Ok(())
}

#[test]
fn test_unknown_problem() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = solve_command(CHAIN, "SE-ST", &[])?;
    cmd.assert().failure();
    file.close()?;
    Ok(())
}

#[test]
fn test_project() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(SUPPORT)?;
    let mut cmd = Command::cargo_bin("dialectica")?;
    cmd.arg("project")
        .arg("--logging-level")
        .arg("off")
        .arg("--support-defense")
        .arg("-f")
        .arg(file.path());
    cmd.assert().success().stdout(predicate::eq(
        "arg(a).\narg(b).\narg(s).\natt(a,b).\natt(s,a).\n",
    ));
    file.close()?;
    Ok(())
}

#[test]
fn test_check() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("dialectica")?;
    cmd.arg("check").arg("-f").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4 argument(s) and 5 attack(s)"));
    file.close()?;
    Ok(())
}

#[test]
fn test_support_defense_may_shrink_grounded() -> Result<(), Box<dyn std::error::Error>> {
    let instance = "arg(x).\narg(b).\narg(s).\narg(z).\natt(x,b).\natt(s,z).\natt(z,s).\nsup(s,b).\n";
    test_answer(instance, "SE-GR", &["[x]\n"], &[])?;
    test_answer(instance, "SE-GR", &["[]\n"], &["--support-defense"])
}
