use shophub_commerce::account::Profile;

use super::{Block, Field};

pub(super) fn blocks(profile: &Profile) -> Vec<Block> {
    vec![
        Block::Avatar {
            image: profile.avatar.clone(),
            name: profile.full_name(),
            caption: format!("Member since {}", profile.member_since),
        },
        Block::heading("Personal Information"),
        Block::Fields {
            items: vec![
                Field::new("First Name", &profile.first_name),
                Field::new("Last Name", &profile.last_name),
                Field::new("Email", &profile.email),
                Field::new("Phone Number", &profile.phone),
                Field::new("Date of Birth", &profile.date_of_birth),
            ],
        },
        Block::heading("Account Settings"),
        Block::links(&["Change Password", "Privacy Settings", "Delete Account"]),
        Block::button("Save Changes"),
    ]
}
