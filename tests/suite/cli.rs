//! The `zengshan` binary end to end

use wiremock::MockServer;

use crate::common::{coins_for_backs, mount_claude_response, stdout_of, zengshan};

#[test]
fn show_renders_hexagram_top_line_first() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path()).args(["show", "101010"]).output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("本卦：水火既济 [101010] 坎宫·水"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[2].contains("上爻"));
    assert!(lines[7].contains("初爻"));
    assert!(!stdout.contains("变卦"));
}

#[test]
fn show_with_changing_lines_adds_transformed_hexagram() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path())
        .args(["show", "111111", "--changing", "1,2,3,4,5,6"])
        .output()
        .unwrap();
    let stdout = stdout_of(&output);
    assert!(stdout.contains("变卦：坤为地"));
    assert!(stdout.contains("动爻：第1、2、3、4、5、6爻"));
}

#[test]
fn scripted_cast_emits_json_reading() {
    let home = tempfile::tempdir().unwrap();
    let coins = coins_for_backs([1, 2, 1, 2, 1, 3]);
    let output = zengshan(home.path())
        .args(["cast", "--json", "--date", "2000-01-01", "--question", "问事业"])
        .args(["--coins", &coins])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(report["throws"].as_array().unwrap().len(), 6);
    assert!(report["calendar"].as_str().unwrap().ends_with("戊午日"));
    let reading = &report["reading"];
    assert_eq!(reading["question"], "问事业");
    assert_eq!(reading["result"]["original"], "101011");
    assert_eq!(reading["result"]["transformed"], "101010");
    assert_eq!(reading["result"]["changing_positions"], serde_json::json!([6]));
    assert_eq!(reading["hexagrams"]["original"]["name"], "风火家人");
    assert_eq!(reading["hexagrams"]["transformed"]["name"], "水火既济");
    assert!(report["interpretation"].is_null());
}

#[test]
fn cast_rejects_wrong_number_of_faces() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path())
        .args(["cast", "--coins", "111"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exactly 18 faces"));
}

#[test]
fn random_cast_prints_six_throws() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path()).arg("cast").output().unwrap();
    let stdout = stdout_of(&output);
    for position in 1..=6 {
        assert!(stdout.contains(&format!("第{position}爻：")));
    }
    assert!(stdout.contains("本卦："));
    assert!(stdout.contains("变卦："));
}

#[test]
fn catalog_filters_by_palace() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path())
        .args(["catalog", "--palace", "坎"])
        .output()
        .unwrap();
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.lines().all(|line| line.contains("坎宫·水")));

    let all = zengshan(home.path()).arg("catalog").output().unwrap();
    assert_eq!(stdout_of(&all).lines().count(), 64);
}

#[test]
fn today_with_fixed_date() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path())
        .args(["today", "--date", "1949-10-01"])
        .output()
        .unwrap();
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("1949-10-01 "));
    assert!(stdout.trim_end().ends_with("甲子日"));
}

#[test]
fn interpret_without_key_names_the_env_var() {
    let home = tempfile::tempdir().unwrap();
    let output = zengshan(home.path())
        .args(["cast", "--interpret", "--coins", &coins_for_backs([1; 6])])
        .output()
        .unwrap();
    assert!(!output.status.success());
    // The reading is still printed before the interpretation fails.
    assert!(String::from_utf8_lossy(&output.stdout).contains("乾为天"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ANTHROPIC_API_KEY"));
}

#[tokio::test(flavor = "multi_thread")]
async fn interpret_uses_configured_key_and_prints_text() {
    let server = MockServer::start().await;
    mount_claude_response(&server, "世爻旺相，谋事可成。").await;

    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".zengshan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[api_keys]\nanthropic = \"${ZENGSHAN_TEST_KEY}\"\n\n[interpretation]\nmax_retries = 0\n",
    )
    .unwrap();

    let mut cmd = zengshan(home.path());
    cmd.args(["cast", "--interpret", "--question", "问谋事"])
        .args(["--coins", &coins_for_backs([1, 2, 1, 2, 1, 2])])
        .env("ZENGSHAN_TEST_KEY", "sk-ant-from-env-ref")
        .env("ZENGSHAN_API_BASE_URL", server.uri());
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("水火既济"));
    assert!(stdout.contains("世爻旺相，谋事可成。"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent = requests[0]
        .headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(sent, "sk-ant-from-env-ref");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(
        body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("所问之事：问谋事")
    );
}
