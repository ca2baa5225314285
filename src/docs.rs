use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use learnlive_models::common::{ErrorResponse, MessageResponse};
use learnlive_models::grades::{CreateGradeDto, OwnGrade, StudentGrade, UpdateGradeDto};
use learnlive_models::group_subjects::{GroupSubject, GroupSubjectDto, UpdateGroupSubjectDto};
use learnlive_models::groups::{CreateGroupDto, Group, UpdateGroupDto};
use learnlive_models::persons::{LoginRequest, RoleCheckResponse, SignupRequest, Student};
use learnlive_models::professor_groups::{
    ProfessorGroupDto, ProfessorWithGroups, UpdateProfessorGroupDto,
};
use learnlive_models::professor_subjects::{
    ProfessorSubjectDto, ProfessorWithSubjects, UpdateProfessorSubjectDto,
};
use learnlive_models::professors::Professor;
use learnlive_models::rooms::{CreateRoomDto, Room, SubjectRoom, UpdateRoomDto};
use learnlive_models::subjects::{CreateSubjectDto, Subject, UpdateSubjectDto};
use learnlive_models::total_grades::{
    CreateTotalGradeDto, OwnTotalGrade, StudentTotalGrade, UpdateTotalGradeDto,
};
use learnlive_models::video::RoomTokenResponse;

/// Cookie name shown in the docs. The running server reads `JWT_NAME`.
const DOCUMENTED_SESSION_COOKIE: &str = "learn_live_JWT";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::check_is_admin_or_professor,
        crate::modules::subjects::controller::list_current_user_subjects,
        crate::modules::subjects::controller::list_subjects,
        crate::modules::subjects::controller::list_subjects_of_a_student,
        crate::modules::subjects::controller::add_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::rooms::controller::list_rooms,
        crate::modules::rooms::controller::list_rooms_of_a_subject,
        crate::modules::rooms::controller::add_room,
        crate::modules::rooms::controller::update_room,
        crate::modules::rooms::controller::delete_room,
        crate::modules::groups::controller::list_groups,
        crate::modules::groups::controller::list_students_of_a_group,
        crate::modules::groups::controller::add_group,
        crate::modules::groups::controller::update_group,
        crate::modules::groups::controller::delete_group,
        crate::modules::group_subjects::controller::list_groups_and_subjects_relations,
        crate::modules::group_subjects::controller::list_subjects_of_a_group,
        crate::modules::group_subjects::controller::list_groups_that_have_a_subject,
        crate::modules::group_subjects::controller::add_groups_and_subjects_relation,
        crate::modules::group_subjects::controller::update_groups_and_subjects_relation,
        crate::modules::group_subjects::controller::delete_groups_and_subjects_relation,
        crate::modules::professor_subjects::controller::list_professors_and_subjects_relations,
        crate::modules::professor_subjects::controller::list_subjects_of_a_professor,
        crate::modules::professor_subjects::controller::list_professors_that_have_a_subject,
        crate::modules::professor_subjects::controller::add_professors_and_subjects_relation,
        crate::modules::professor_subjects::controller::update_professors_and_subjects_relation,
        crate::modules::professor_subjects::controller::delete_professors_and_subjects_relation,
        crate::modules::professor_groups::controller::list_professors_and_groups_relations,
        crate::modules::professor_groups::controller::list_groups_of_a_professor,
        crate::modules::professor_groups::controller::list_professors_that_have_a_group,
        crate::modules::professor_groups::controller::add_professors_and_groups_relation,
        crate::modules::professor_groups::controller::update_professors_and_groups_relation,
        crate::modules::professor_groups::controller::delete_professors_and_groups_relation,
        crate::modules::grades::controller::list_current_user_grades_and_attendance,
        crate::modules::grades::controller::list_grades_and_attendance_of_a_student,
        crate::modules::grades::controller::list_grades_and_attendance_of_a_group,
        crate::modules::grades::controller::insert_grade_and_attendance_of_a_student,
        crate::modules::grades::controller::update_grade_and_attendance_of_a_student,
        crate::modules::grades::controller::delete_grade_and_attendance_of_a_student,
        crate::modules::total_grades::controller::list_current_user_total_grades,
        crate::modules::total_grades::controller::list_total_grades_of_a_student,
        crate::modules::total_grades::controller::list_total_grades_of_a_group,
        crate::modules::total_grades::controller::insert_total_grade_of_a_student,
        crate::modules::total_grades::controller::update_total_grade_of_a_student,
        crate::modules::total_grades::controller::delete_total_grade_of_a_student,
        crate::modules::video::controller::get_token,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            SignupRequest,
            LoginRequest,
            RoleCheckResponse,
            Student,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Room,
            SubjectRoom,
            CreateRoomDto,
            UpdateRoomDto,
            Group,
            CreateGroupDto,
            UpdateGroupDto,
            GroupSubject,
            GroupSubjectDto,
            UpdateGroupSubjectDto,
            Professor,
            ProfessorWithSubjects,
            ProfessorSubjectDto,
            UpdateProfessorSubjectDto,
            ProfessorWithGroups,
            ProfessorGroupDto,
            UpdateProfessorGroupDto,
            OwnGrade,
            StudentGrade,
            CreateGradeDto,
            UpdateGradeDto,
            OwnTotalGrade,
            StudentTotalGrade,
            CreateTotalGradeDto,
            UpdateTotalGradeDto,
            RoomTokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, signup and role checks"),
        (name = "Subjects", description = "Subject management"),
        (name = "Rooms", description = "Video rooms attached to subjects"),
        (name = "Groups", description = "Study group management"),
        (name = "Group Subjects", description = "Which groups study which subjects"),
        (name = "Professor Subjects", description = "Which professors teach which subjects"),
        (name = "Professor Groups", description = "Which professors teach which groups"),
        (name = "Grades", description = "Per-lesson grades and attendance"),
        (name = "Total Grades", description = "Final grades per subject"),
        (name = "Video", description = "Video room access tokens")
    ),
    info(
        title = "LearnLive API",
        version = "0.1.0",
        description = "University learning-management API built with Rust, Axum, and PostgreSQL. Sessions are carried in a JWT cookie.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    DOCUMENTED_SESSION_COOKIE,
                ))),
            )
        }
    }
}
