use anyhow::Result;
use event_toolbox::core::export;
use event_toolbox::domain::ports::Storage;
use event_toolbox::{LocalStorage, Roster};
use tempfile::TempDir;

#[tokio::test]
async fn file_import_follows_the_same_rule_as_paste() -> Result<()> {
    let dir = TempDir::new()?;
    let base = dir.path().to_str().unwrap().to_string();
    let storage = LocalStorage::new(base);

    storage
        .write_file("names.csv", "Ann, Bob\nCarol,,  Dan \n".as_bytes())
        .await?;

    let mut imported = Roster::new();
    let data = storage.read_file("names.csv").await?;
    imported.add_raw(&String::from_utf8_lossy(&data));

    let mut pasted = Roster::new();
    pasted.add_raw("Ann, Bob\nCarol,,  Dan \n");

    assert_eq!(imported.names(), vec!["Ann", "Bob", "Carol", "Dan"]);
    assert_eq!(imported.names(), pasted.names());
    Ok(())
}

#[tokio::test]
async fn import_of_only_separators_adds_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    storage.write_file("empty.txt", ",,,\n \n,".as_bytes()).await?;

    let mut roster = Roster::new();
    let data = storage.read_file("empty.txt").await?;
    let added = roster.add_raw(&String::from_utf8_lossy(&data));

    assert_eq!(added, 0);
    assert!(roster.is_empty());
    Ok(())
}

#[tokio::test]
async fn exported_roster_csv_starts_with_a_bom_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

    let mut roster = Roster::new();
    roster.add_names(["王小明", "李美玲"]);

    let csv = export::roster_csv(&roster.names());
    storage.write_file("backup.csv", csv.as_bytes()).await?;

    let bytes = storage.read_file("backup.csv").await?;
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(
        String::from_utf8(bytes[3..].to_vec())?,
        "姓名\n王小明\n李美玲"
    );
    Ok(())
}

#[tokio::test]
async fn import_dedupe_export_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    storage
        .write_file("names.txt", "Ann\nBob\nAnn\nCarol".as_bytes())
        .await?;

    let mut roster = Roster::new();
    let data = storage.read_file("names.txt").await?;
    roster.add_raw(&String::from_utf8_lossy(&data));

    assert_eq!(roster.duplicate_ids().len(), 2);
    assert_eq!(roster.dedupe(), 1);
    assert!(roster.duplicate_ids().is_empty());

    let csv = export::roster_csv(&roster.names());
    assert_eq!(
        csv.strip_prefix(export::BOM).unwrap(),
        "姓名\nAnn\nBob\nCarol"
    );
    Ok(())
}
