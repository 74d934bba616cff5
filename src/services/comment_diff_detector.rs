// コメント差分検出サービス
//
// 現在のスナップショットと前回のスナップショットを比較し、
// 各コメントを追加・削除・変更に分類します。

use crate::core::comment::{ChangeEntry, CommentSnapshot};
use crate::core::config::Target;
use std::collections::BTreeSet;

/// コメント差分検出サービス
#[derive(Debug, Clone)]
pub struct CommentDiffDetector {}

impl CommentDiffDetector {
    /// 新しいCommentDiffDetectorを作成
    pub fn new() -> Self {
        Self {}
    }

    /// コメント差分を検出
    ///
    /// ターゲット種別ごとに識別子の和集合を走査します。
    /// 出力順はターゲット種別（table → column）、識別子の辞書順で固定です。
    /// リネーム検出は行わず、識別子の変化は削除と追加の組になります。
    ///
    /// # Arguments
    ///
    /// * `current` - 今回導出したスナップショット
    /// * `previous` - 前回保存したスナップショット
    ///
    /// # Returns
    ///
    /// 変更のあったコメントのみを含む差分エントリのリスト
    pub fn detect_diff(
        &self,
        current: &CommentSnapshot,
        previous: &CommentSnapshot,
    ) -> Vec<ChangeEntry> {
        let mut changes = Vec::new();

        for target in Target::ALL {
            let identifiers: BTreeSet<&String> = current
                .entries(target)
                .keys()
                .chain(previous.entries(target).keys())
                .collect();

            for identifier in identifiers {
                let change = match (
                    current.get(target, identifier),
                    previous.get(target, identifier),
                ) {
                    (Some(now), None) => Some(ChangeEntry::added(target, identifier, now)),
                    (None, Some(before)) => {
                        Some(ChangeEntry::removed(target, identifier, before))
                    }
                    (Some(now), Some(before)) if now != before => {
                        Some(ChangeEntry::modified(target, identifier, before, now))
                    }
                    _ => None,
                };

                if let Some(change) = change {
                    changes.push(change);
                }
            }
        }

        changes
    }
}

impl Default for CommentDiffDetector {
    fn default() -> Self {
        Self::new()
    }
}
