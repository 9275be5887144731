//! # 写し送付先リスト
//!
//! カンマ区切りで保存された送付先設定を分割するための値オブジェクト。
//!
//! ## 設計方針
//!
//! - **分割時はトリムしない**: 保存値全体の前後空白だけを落とし、分割後の
//!   各要素は生のまま保持する。アドレスごとのトリムはトランスポートへ
//!   渡す直前に行う

/// 写し送付先リスト（値オブジェクト）
///
/// `email_cc` カスタム属性や `sales_email/order/copy_to` 設定のような
/// カンマ区切り文字列を分割した、順序付きのアドレス列。
///
/// # 不変条件
///
/// - 保存値が空白のみの場合は空リスト
/// - 要素は分割時の生の部分文字列（前後空白を含みうる）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyToList(Vec<String>);

impl CopyToList {
    /// 空のリストを作成する
    pub fn empty() -> Self {
        Self::default()
    }

    /// カンマ区切り文字列を分割する
    ///
    /// 全体をトリムして空なら空リスト。それ以外はカンマで分割し、
    /// 各要素はトリムせずそのまま保持する。
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::empty();
        }
        Self(trimmed.split(',').map(str::to_owned).collect())
    }

    /// 要素数を返す
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// リストが空かを返す
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 生の要素を順に返す
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn カンマ区切りの保存値を生のまま分割する() {
        let list = CopyToList::parse("a@x.com, b@x.com");
        let parts: Vec<&str> = list.iter().collect();
        assert_eq!(parts, vec!["a@x.com", " b@x.com"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn 空白のみの保存値は空リストになる(#[case] raw: &str) {
        assert!(CopyToList::parse(raw).is_empty());
    }

    #[test]
    fn 単一アドレスは1要素のリストになる() {
        let list = CopyToList::parse("foo@bar.com");
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next(), Some("foo@bar.com"));
    }

    #[test]
    fn 全体の前後空白は分割前に落とされる() {
        let list = CopyToList::parse("  a@x.com,b@x.com  ");
        let parts: Vec<&str> = list.iter().collect();
        assert_eq!(parts, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn 末尾カンマは空要素として残る() {
        let list = CopyToList::parse("a@x.com,");
        let parts: Vec<&str> = list.iter().collect();
        assert_eq!(parts, vec!["a@x.com", ""]);
    }
}
