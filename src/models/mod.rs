//! University domain models.
//!
//! Plain records for every entity in the object graph. Links between
//! entities are typed handles ([`StudentRef`], [`CourseRef`], ...) into a
//! [`University`](crate::University) arena; the arena's relationship methods
//! keep both sides of each link in step.
//!
//! | Entity | Unique key | Links |
//! |--------|-----------|-------|
//! | Student | student_id | enrollments, groups |
//! | Professor | employee_id | courses, lessons |
//! | Course | course_code | professor, students, faculty, enrollments |
//! | Enrollment | (student, course) | student, course |
//! | Group | group_name | students, schedule |
//! | Room | room_number | lessons |
//! | Lesson | — | professor, room, course |
//! | Schedule | — | groups, professors, rooms, lessons |

mod course;
mod department;
mod enrollment;
mod group;
pub(crate) mod handle;
mod lesson;
mod person;
mod professor;
mod room;
mod schedule;
mod student;

pub use course::Course;
pub use department::{Department, Faculty};
pub use enrollment::Enrollment;
pub use group::Group;
pub use handle::{
    CourseRef, DepartmentRef, EnrollmentRef, FacultyRef, GroupRef, LessonRef, ProfessorRef,
    RoomRef, ScheduleRef, StudentRef,
};
pub use lesson::Lesson;
pub use person::{Person, PersonInfo};
pub use professor::Professor;
pub use room::Room;
pub use schedule::Schedule;
pub use student::Student;
