//! User entity <-> model mapper

use campaign_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity (password hash stays behind the repo)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            employee_id: model.employee_id,
            department: model.department,
            avatar: model.avatar,
            gender: model.gender,
            date_of_birth: model.date_of_birth,
            contact_no: model.contact_no,
            created_at: model.created_at,
        }
    }
}
