//! User Entity Implementation
//!
//! 사용자 엔티티의 저장 형태와 조회(populate) 형태를 정의합니다.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Cat, NamedDocument};

/// 사용자 엔티티 (저장 형태)
///
/// `cats`는 고양이 문서의 `ObjectId` 목록이며 순서가 보존됩니다.
/// 생성/수정 시점에 고양이 이름을 ID로 변환하여 저장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub name: String,
    /// 참조하는 고양이 ID 목록
    #[serde(default)]
    pub cats: Vec<ObjectId>,
}

impl User {
    pub fn new(name: impl Into<String>, cats: Vec<ObjectId>) -> Self {
        Self {
            id: None,
            name: name.into(),
            cats,
        }
    }

    /// 이미 조회된 고양이 레코드들로부터 참조 목록을 구성합니다.
    ///
    /// 아직 저장되지 않은(`id`가 없는) 고양이는 참조할 수 없으므로 제외됩니다.
    pub fn with_cats(name: impl Into<String>, cats: &[Cat]) -> Self {
        Self::new(name, cats.iter().filter_map(|cat| cat.id).collect())
    }
}

impl NamedDocument for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 고양이 참조를 전체 레코드로 펼친 사용자 (조회 형태)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub cats: Vec<Cat>,
}

impl PopulatedUser {
    /// 순서가 이미 맞춰진 고양이 목록으로 조회 결과를 만듭니다.
    pub fn from_parts(user: User, cats: Vec<Cat>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            cats,
        }
    }

    /// 저장된 참조 순서대로 `lookup`에서 고양이를 찾아 펼칩니다.
    ///
    /// 참조 대상이 삭제되어 `lookup`에 없으면 결과에서 제외됩니다.
    pub fn populate(user: User, lookup: &HashMap<ObjectId, Cat>) -> Self {
        let cats = user
            .cats
            .iter()
            .filter_map(|id| lookup.get(id).cloned())
            .collect();

        Self {
            id: user.id,
            name: user.name,
            cats,
        }
    }

    /// 고양이 이름 목록 (저장 순서)
    pub fn cat_names(&self) -> Vec<&str> {
        self.cats.iter().map(|cat| cat.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_cat(name: &str) -> Cat {
        let mut cat = Cat::new(name, 3.0);
        cat.id = Some(ObjectId::new());
        cat
    }

    #[test]
    fn test_populate_keeps_reference_order() {
        let tom = stored_cat("Tom");
        let felix = stored_cat("Felix");
        let user = User::with_cats("Jerry", &[felix.clone(), tom.clone()]);

        let lookup: HashMap<_, _> = [tom, felix]
            .into_iter()
            .map(|cat| (cat.id.unwrap(), cat))
            .collect();

        let populated = PopulatedUser::populate(user, &lookup);
        assert_eq!(populated.cat_names(), vec!["Felix", "Tom"]);
    }

    #[test]
    fn test_populate_drops_dangling_references() {
        let tom = stored_cat("Tom");
        let gone = stored_cat("Gone");
        let user = User::with_cats("Jerry", &[gone, tom.clone()]);

        let lookup: HashMap<_, _> = std::iter::once((tom.id.unwrap(), tom)).collect();

        let populated = PopulatedUser::populate(user, &lookup);
        assert_eq!(populated.cat_names(), vec!["Tom"]);
    }

    #[test]
    fn test_user_document_defaults_missing_cats() {
        let user: User = serde_json::from_str(r#"{ "name": "Jerry" }"#).unwrap();

        assert!(user.cats.is_empty());
        assert!(user.id.is_none());
    }
}
