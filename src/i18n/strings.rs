/// All localized user-facing strings for a language
///
/// Strings are stored raw and unescaped. Pages escape them for HTML when
/// rendering.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Registration Form ====================
    pub form_title: &'static str,
    pub form_subtitle: &'static str,

    pub category_title: &'static str,
    pub category_ent: &'static str,
    pub category_student: &'static str,
    pub category_chairman: &'static str,

    pub doctorate_title: &'static str,
    pub doctorate_prof_md_phd: &'static str,
    pub doctorate_aprof_md_phd: &'static str,
    pub doctorate_dr_md_phd: &'static str,
    pub doctorate_dr_md: &'static str,
    pub doctorate_dr: &'static str,

    pub nationality: &'static str,
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub last_name: &'static str,
    pub dob: &'static str,
    pub institution: &'static str,
    pub email: &'static str,
    pub phone: &'static str,

    pub sponsor_title: &'static str,
    pub sponsor_subtitle: &'static str,
    pub sponsor_placeholder: &'static str,

    pub gala_title: &'static str,
    pub gala_subtitle: &'static str,

    pub submit: &'static str,
    /// Shown when the backend accepted the registration but sent no payment link
    pub submit_success: &'static str,
    /// Generic submission failure, used when the backend sends no message
    pub submit_error: &'static str,
    pub api_error_title: &'static str,
    pub api_error_description: &'static str,
    pub required: &'static str,

    // ==================== Validation ====================
    pub validation_category: &'static str,
    pub validation_doctorate: &'static str,
    pub validation_first_name: &'static str,
    pub validation_last_name: &'static str,
    pub validation_dob: &'static str,
    pub validation_institution: &'static str,
    pub validation_email: &'static str,
    pub validation_phone: &'static str,
    pub validation_nationality: &'static str,

    // ==================== Checkout Status ====================
    pub checkout_title: &'static str,
    pub checkout_subtitle: &'static str,
    pub checkout_registration_id: &'static str,
    pub checkout_payment_status: &'static str,
    pub checkout_payment_success: &'static str,
    pub checkout_payment_failed: &'static str,
    pub checkout_no_info: &'static str,
    pub checkout_error: &'static str,

    // ==================== Price Lookup ====================
    pub price_title: &'static str,
    pub price_subtype: &'static str,
    pub price_select_category: &'static str,
    pub price_error_title: &'static str,
    pub price_error_description: &'static str,
    /// Label of the button that refreshes the price block
    pub price_check: &'static str,

    pub total_title: &'static str,
    pub total_includes: &'static str,
    pub total_conference: &'static str,
    pub total_gala: &'static str,
    pub total_free: &'static str,

    // ==================== Fee Table ====================
    pub fees_title: &'static str,
    pub fees_early_title: &'static str,
    pub fees_early_subtitle: &'static str,
    pub fees_early_price: &'static str,
    pub fees_standard_title: &'static str,
    pub fees_standard_subtitle: &'static str,
    pub fees_standard_price: &'static str,
    pub fees_onsite_title: &'static str,
    pub fees_onsite_subtitle: &'static str,
    pub fees_onsite_price: &'static str,
    pub fees_delegate: &'static str,
    pub fees_resident_title: &'static str,
    pub fees_resident_price: &'static str,
    pub fees_gala_title: &'static str,
    pub fees_gala_price: &'static str,
    pub fees_note: &'static str,

    pub status_success: &'static str,
    pub status_failed: &'static str,

    /// Placeholder for optional details left empty
    pub not_available: &'static str,
}

// ==================== Vietnamese Strings ====================

/// Vietnamese strings (default and fallback)
pub const VIETNAMESE_STRINGS: LanguageStrings = LanguageStrings {
    form_title: "Đăng Ký Tham Dự",
    form_subtitle: "Vui lòng điền đầy đủ thông tin bắt buộc",

    category_title: "Loại Đăng Ký",
    category_ent: "Bác sĩ Tai Mũi Họng",
    category_student: "Bác sĩ nội trú",
    category_chairman: "Chủ tịch & Giảng viên",

    doctorate_title: "Học Vị",
    doctorate_prof_md_phd: "GS.TS. Bác sĩ",
    doctorate_aprof_md_phd: "PGS.TS Bác sĩ",
    doctorate_dr_md_phd: "TS. Bác sĩ",
    doctorate_dr_md: "Bác sĩ",
    doctorate_dr: "Bác sĩ",

    nationality: "Quốc tịch",
    first_name: "Tên",
    middle_name: "Tên đệm",
    last_name: "Họ",
    dob: "Ngày sinh",
    institution: "Cơ quan",
    email: "Email",
    phone: "Số điện thoại",

    sponsor_title: "Người bảo trợ",
    sponsor_subtitle: "Nếu có người bảo trợ, vui lòng nhập tên",
    sponsor_placeholder: "Nhập tên người bảo trợ",

    gala_title: "Gala Dinner",
    gala_subtitle: "Tham gia bữa tiệc gala đặc biệt (1.000.000 VND)",

    submit: "Thanh toán",
    submit_success: "Đăng ký thành công! Đang chuyển hướng đến trang thanh toán...",
    submit_error: "Đăng ký thất bại. Vui lòng thử lại.",
    api_error_title: "Có lỗi xảy ra!",
    api_error_description:
        "Hãy kiểm tra lại thông tin cá nhân. Mỗi người chỉ được phép đăng kí 1 lần",
    required: "Trường bắt buộc",

    validation_category: "Vui lòng chọn loại đăng ký",
    validation_doctorate: "Vui lòng chọn học vị",
    validation_first_name: "Tên phải từ 2-50 ký tự",
    validation_last_name: "Họ phải từ 2-50 ký tự",
    validation_dob: "Vui lòng chọn ngày sinh",
    validation_institution: "Vui lòng nhập tên cơ quan",
    validation_email: "Vui lòng nhập email hợp lệ",
    validation_phone: "Vui lòng nhập số điện thoại hợp lệ",
    validation_nationality: "Vui lòng nhập quốc tịch",

    checkout_title: "Thông tin đăng ký",
    checkout_subtitle: "Chi tiết đăng ký đầy đủ",
    checkout_registration_id: "Mã đăng ký",
    checkout_payment_status: "Trạng thái thanh toán",
    checkout_payment_success: "Thanh toán thành công",
    checkout_payment_failed: "Thanh toán thất bại",
    checkout_no_info: "Không tìm thấy thông tin đăng ký",
    checkout_error: "Không thể tải thông tin đăng ký",

    price_title: "Phí đăng ký",
    price_subtype: "Loại đăng ký",
    price_select_category: "Vui lòng chọn loại đăng ký",
    price_error_title: "Lỗi tải giá",
    price_error_description: "Không thể tải thông tin giá. Vui lòng thử lại.",
    price_check: "Xem phí",

    total_title: "Tổng phí đăng ký",
    total_includes: "Phí bao gồm:",
    total_conference: "Phí tham dự hội nghị",
    total_gala: "Phí tham dự gala dinner",
    total_free: "Miễn phí",

    fees_title: "Chi phí tham dự",
    fees_early_title: "Đăng ký sớm",
    fees_early_subtitle: "Đến 31/03/2025",
    fees_early_price: "1.800.000 VND",
    fees_standard_title: "Đăng ký thường",
    fees_standard_subtitle: "01/04 - 31/05/2025",
    fees_standard_price: "2.200.000 VND",
    fees_onsite_title: "Đăng ký tại chỗ",
    fees_onsite_subtitle: "Sau 01/06/2025",
    fees_onsite_price: "3.000.000 VND",
    fees_delegate: "Đại biểu tham dự",
    fees_resident_title: "Nội trú",
    fees_resident_price: "1.500.000 VND",
    fees_gala_title: "Gala Dinner",
    fees_gala_price: "1.000.000 VND",
    fees_note: "Tất cả phí được tính bằng đồng Việt Nam (VND)",

    status_success: "Thành công",
    status_failed: "Thất bại",

    not_available: "N/A",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    form_title: "Registration Form",
    form_subtitle: "Please fill in all required fields",

    category_title: "Academic titles and degrees",
    category_ent: "ENT Doctors",
    category_student: "Resident & Trainee",
    category_chairman: "Chairman & Speaker",

    doctorate_title: "Doctorate Degree",
    doctorate_prof_md_phd: "Prof. M.D, Ph.D",
    doctorate_aprof_md_phd: "A/Prof. M.D, Ph.D",
    doctorate_dr_md_phd: "Dr. M.D, Ph.D",
    doctorate_dr_md: "Dr. M.D",
    doctorate_dr: "Dr.",

    nationality: "Nationality",
    first_name: "First Name",
    middle_name: "Middle Name",
    last_name: "Last Name",
    dob: "Date of Birth",
    institution: "Institution",
    email: "Email",
    phone: "Phone Number",

    sponsor_title: "Sponsor",
    sponsor_subtitle: "If you have a sponsor, please enter their name",
    sponsor_placeholder: "Enter sponsor name",

    gala_title: "Gala Dinner",
    gala_subtitle: "Join us for the special gala dinner event (100 USD)",

    submit: "Go to payment",
    submit_success: "Registration successful! Redirecting to payment...",
    submit_error: "Registration failed. Please try again.",
    api_error_title: "Error occurred!",
    api_error_description:
        "Please check your personal information. Each person is only allowed to register once.",
    required: "Required field",

    validation_category: "Please select a registration category",
    validation_doctorate: "Please select your doctorate degree",
    validation_first_name: "First name must be 2-50 letters",
    validation_last_name: "Last name must be 2-50 letters",
    validation_dob: "Please select your date of birth",
    validation_institution: "Please enter your institution",
    validation_email: "Please enter a valid email address",
    validation_phone: "Please enter a valid phone number",
    validation_nationality: "Please enter your nationality",

    checkout_title: "Registration Information",
    checkout_subtitle: "Complete registration details",
    checkout_registration_id: "Registration ID",
    checkout_payment_status: "Payment Status",
    checkout_payment_success: "Payment Successful",
    checkout_payment_failed: "Payment Failed",
    checkout_no_info: "No registration information found",
    checkout_error: "Failed to load registration information",

    price_title: "Registration Fee",
    price_subtype: "Registration Type",
    price_select_category: "Please select a registration category",
    price_error_title: "Error Loading Price",
    price_error_description: "Failed to load price information. Please try again.",
    price_check: "Check fee",

    total_title: "Total Registration Fee",
    total_includes: "Fee includes:",
    total_conference: "Conference registration fee",
    total_gala: "Gala dinner",
    total_free: "Free",

    fees_title: "Registration Fee",
    fees_early_title: "Early Bird",
    fees_early_subtitle: "Until March 31, 2025",
    fees_early_price: "500 USD",
    fees_standard_title: "Standard",
    fees_standard_subtitle: "April 1 - May 31, 2025",
    fees_standard_price: "600 USD",
    fees_onsite_title: "On-site",
    fees_onsite_subtitle: "After June 1, 2025",
    fees_onsite_price: "700 USD",
    fees_delegate: "Doctor",
    fees_resident_title: "Resident & Trainee",
    fees_resident_price: "300 USD",
    fees_gala_title: "Gala Dinner",
    fees_gala_price: "100 USD",
    fees_note: "All fees are in USD",

    status_success: "Success",
    status_failed: "Failed",

    not_available: "N/A",
};
