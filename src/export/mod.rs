pub mod encoder;

pub use encoder::{
    available_fields, encode_csv, export_filename, ExportError, ExportField, FieldSelection,
};

use crate::search::record::EntityGroup;

/// Columns offered for the unified record view
pub fn unified_fields() -> Vec<ExportField> {
    vec![
        ExportField::labeled("idLabel", "ID"),
        ExportField::labeled("group", "Type"),
        ExportField::labeled("name", "Name"),
        ExportField::labeled("email", "Email"),
        ExportField::labeled("phone", "Phone"),
        ExportField::labeled("phoneAlt", "Alternate Phone"),
        ExportField::labeled("aadharNumber", "Aadhar Number"),
        ExportField::labeled("regNo", "Registration No"),
        ExportField::labeled("transactionId", "Transaction ID"),
        ExportField::labeled("status", "Status"),
        ExportField::labeled("createdAt", "Created At"),
    ]
}

/// Default columns when exporting raw entities of one group
pub fn default_fields(group: EntityGroup) -> Vec<ExportField> {
    let specs: &[(&str, &str)] = match group {
        EntityGroup::Player => &[
            ("idNo", "ID No"),
            ("fullName", "Full Name"),
            ("fatherName", "Father's Name"),
            ("dateOfBirth", "Date of Birth"),
            ("gender", "Gender"),
            ("email", "Email"),
            ("phone", "Phone"),
            ("aadharNumber", "Aadhar Number"),
            ("address", "Address"),
            ("transactionId", "Transaction ID"),
            ("status", "Status"),
            ("createdAt", "Registered On"),
        ],
        EntityGroup::Institution => &[
            ("regNo", "Registration No"),
            ("instituteName", "Institute Name"),
            ("instituteType", "Institute Type"),
            ("headName", "Head Name"),
            ("email", "Email"),
            ("contactNumber", "Contact Number"),
            ("address", "Address"),
            ("transactionId", "Transaction ID"),
            ("status", "Status"),
            ("createdAt", "Registered On"),
        ],
        EntityGroup::Official => &[
            ("candidateName", "Candidate Name"),
            ("guardianName", "Guardian Name"),
            ("dob", "Date of Birth"),
            ("email", "Email"),
            ("mobile", "Mobile"),
            ("aadharNumber", "Aadhar Number"),
            ("grade", "Grade"),
            ("transactionId", "Transaction ID"),
            ("status", "Status"),
            ("createdAt", "Registered On"),
        ],
    };
    specs.iter().map(|(key, label)| ExportField::labeled(*key, *label)).collect()
}
