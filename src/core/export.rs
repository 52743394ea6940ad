use crate::domain::model::Group;
use chrono::Local;

/// UTF-8 byte-order mark, required as the first three bytes of every export
/// so spreadsheet tools pick the right encoding.
pub const BOM: &str = "\u{feff}";

const ROSTER_HEADER: &str = "姓名";
const GROUP_HEADER: &str = "組別名稱,成員姓名";

// 姓名一行一筆，依名單順序。欄位原樣輸出，不轉義、不加引號。
pub fn roster_csv(names: &[String]) -> String {
    format!("{}{}\n{}", BOM, ROSTER_HEADER, names.join("\n"))
}

// 每對 (組名, 成員) 一行，組依產生順序、成員依組內順序
pub fn groups_csv(groups: &[Group]) -> String {
    let rows = groups
        .iter()
        .flat_map(|group| {
            group
                .members
                .iter()
                .map(move |member| format!("{},{}", group.name, member))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}\n{}", BOM, GROUP_HEADER, rows)
}

// 檔名帶日期，僅供參考，不是位元組契約的一部分
pub fn roster_filename() -> String {
    format!("名單備份_{}.csv", Local::now().format("%Y-%m-%d"))
}

pub fn groups_filename() -> String {
    format!("分組結果_{}.csv", Local::now().format("%Y-%m-%d"))
}
