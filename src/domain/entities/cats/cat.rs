//! Cat Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::cats::request::CreateCatRequest;
use crate::domain::entities::NamedDocument;

/// 고양이 엔티티
///
/// `name`이 컬렉션 내 식별 키입니다. 수정은 이름 기준 전체 교체로 이루어지며
/// `_id`는 유지됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 고양이 이름 (unique, 최대 50자)
    pub name: String,
    /// 꼬리 길이 (1 이상)
    pub tail_length: f64,
}

impl Cat {
    /// 아직 저장되지 않은 고양이 생성 (`id`는 저장소가 할당)
    pub fn new(name: impl Into<String>, tail_length: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            tail_length,
        }
    }
}

impl From<CreateCatRequest> for Cat {
    fn from(request: CreateCatRequest) -> Self {
        Cat::new(request.name, request.tail_length)
    }
}

impl NamedDocument for Cat {
    const COLLECTION: &'static str = "cats";
    const LABEL: &'static str = "Cat";

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
