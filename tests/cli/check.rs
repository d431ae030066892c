use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_unmarked_jsx_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export function Button() {
    return <button>Submit</button>;
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Submit"  string-is-marked-for-translation
      --> ./src/app.tsx:2:20
      |
    2 |     return <button>Submit</button>;
      |                    ^
      = note: String is not marked for translation.

    ✘ 1 problem

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export function Button() {
    return <button><Trans>Submit</Trans></button>;
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_multiple_files_are_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/b.tsx",
        r#"export const B = () => <p title="Second file">Bye</p>;"#,
    )?;
    test.write_file(
        "src/a.tsx",
        r#"export const a = isOpen ? "Door is open" : "Door is closed";"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Door is open"  string-is-marked-for-translation
      --> ./src/a.tsx:1:27
      |
    1 | export const a = isOpen ? "Door is open" : "Door is closed";
      |                           ^
      = note: String is not marked for translation.

    error: "Door is closed"  string-is-marked-for-translation
      --> ./src/a.tsx:1:44
      |
    1 | export const a = isOpen ? "Door is open" : "Door is closed";
      |                                            ^
      = note: String is not marked for translation.

    error: "Second file"  string-is-marked-for-translation
      --> ./src/b.tsx:1:33
      |
    1 | export const B = () => <p title="Second file">Bye</p>;
      |                                 ^
      = note: String is not marked for translation.

    error: "Bye"  string-is-marked-for-translation
      --> ./src/b.tsx:1:47
      |
    1 | export const B = () => <p title="Second file">Bye</p>;
      |                                               ^
      = note: String is not marked for translation.

    ✘ 4 problems

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_disabled_without_enable_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const A = () => <p>Hello</p>;")?;

    assert_cmd_snapshot!(test.command().arg("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    note: string-is-marked-for-translation is disabled (pass --enable or set TRANSMARK_ENABLED=true)
    ");

    Ok(())
}

#[test]
fn test_enabled_through_environment() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const A = () => <p>Hello</p>;")?;

    assert_cmd_snapshot!(
        test.command().arg("check").env("TRANSMARK_ENABLED", "true"),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Hello"  string-is-marked-for-translation
      --> ./src/app.tsx:1:27
      |
    1 | export const A = () => <p>Hello</p>;
      |                           ^
      = note: String is not marked for translation.

    ✘ 1 problem

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_config_ignore_lists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transmarkrc.json",
        r#"{
  "ignoreAttributes": ["placeholder"],
  "ignoreTags": ["Select"],
  "ignoreFunctions": ["console.log"]
}"#,
    )?;
    test.write_file(
        "src/form.tsx",
        r#"export const Form = () => {
  console.log("Rendering the form");
  return (
    <form>
      <input placeholder="Your name" />
      <Select>Pick one</Select>
    </form>
  );
};
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_ignores_and_includes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transmarkrc.json",
        r#"{ "includes": ["src"], "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/generated/strings.ts", r#"export const a = "Hello world";"#)?;
    test.write_file("scripts/build.js", r#"console.log("Build finished");"#)?;
    test.write_file("src/ok.ts", "export const x = 1;")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_test_files_are_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.test.tsx", "it('renders', () => <p>Hello</p>);")?;
    test.write_file("src/__tests__/helper.ts", r#"export const msg = "Some text";"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 0 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transmarkrc.json", r#"{ "ignoreStrings": ["x"] }"#)?;

    insta::with_settings!({filters => vec![
        (r"`ignoreStrings`, expected one of .*", "`ignoreStrings`, [EXPECTED FIELDS]"),
    ]}, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to load .transmarkrc.json: Failed to parse config file: "./.transmarkrc.json": unknown field `ignoreStrings`, [EXPECTED FIELDS]
        "#);
    });

    Ok(())
}

#[test]
fn test_parse_errors_are_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.tsx", "export const = ;")?;
    test.write_file("src/ok.tsx", "export const A = () => <p>Hello</p>;")?;

    insta::with_settings!({filters => vec![
        (r#"Failed to parse \./src/broken\.tsx: .*"  parse-error"#,
         r#"Failed to parse ./src/broken.tsx: [SYNTAX ERROR]"  parse-error"#),
    ]}, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "Failed to parse ./src/broken.tsx: [SYNTAX ERROR]"  parse-error
          --> ./src/broken.tsx

        error: "Hello"  string-is-marked-for-translation
          --> ./src/ok.tsx:1:27
          |
        1 | export const A = () => <p>Hello</p>;
          |                           ^
          = note: String is not marked for translation.

        ✘ 2 problems

        ----- stderr -----
        warning: 1 file(s) could not be parsed (use -v for details)
        "#);
    });

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::with_file("web/app.jsx", "export const A = () => <p>Hello</p>;")?;
    test.write_file("other/app.jsx", "export const B = () => <p>Other</p>;")?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "web"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Hello"  string-is-marked-for-translation
      --> web/app.jsx:1:27
      |
    1 | export const A = () => <p>Hello</p>;
      |                           ^
      = note: String is not marked for translation.

    ✘ 1 problem

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for finding JSX/JS strings that are not marked for translation

    Usage: transmark [COMMAND]

    Commands:
      check  Report string literals that are not marked for translation
      init   Initialize a new .transmarkrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
