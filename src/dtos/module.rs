//! Module DTOs - Moduli, iscrizioni e supervisioni

use crate::entities::{Enrollment, Module, SupervisionRow};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleDTO {
    #[serde(rename = "ID")]
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<Module> for ModuleDTO {
    fn from(value: Module) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
        }
    }
}

/// DTO per creare un modulo (senza id), stessa forma di `ModuleDTO`
#[derive(Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct CreateModuleDTO {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EnrollDTO {
    pub module_id: i32,
    pub student_id: i32,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SuperviseDTO {
    pub module_id: i32,
    pub staff_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentDTO {
    #[serde(rename = "ModuleID")]
    pub module_id: i32,
    #[serde(rename = "StudentID")]
    pub student_id: i32,
}

impl From<Enrollment> for EnrollmentDTO {
    fn from(value: Enrollment) -> Self {
        Self {
            module_id: value.module_id,
            student_id: value.student_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StaffSummaryDTO {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SupervisionDTO {
    #[serde(rename = "ModuleID")]
    pub module_id: i32,
    pub staff: StaffSummaryDTO,
}

impl From<SupervisionRow> for SupervisionDTO {
    fn from(value: SupervisionRow) -> Self {
        Self {
            module_id: value.module_id,
            staff: StaffSummaryDTO {
                id: value.staff_id,
                name: value.staff_name,
                email: value.staff_email,
            },
        }
    }
}
