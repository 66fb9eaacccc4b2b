//! Relationship management.
//!
//! Every method here links two entities and updates both sides in the same
//! call. Two flavours exist for several links:
//!
//! - **Strict** entry points, initiated from the student or professor side
//!   ([`University::enroll_in_course`], [`University::join_group`],
//!   [`University::assign_course`]), reject a redundant link with an error
//!   and leave the graph unchanged.
//! - **Permissive** entry points, initiated from the container side
//!   ([`University::course_add_student`], [`University::group_add_student`],
//!   [`University::room_add_lesson`], the `schedule_add_*` family), silently
//!   ignore duplicates.
//!
//! Membership checks are linear scans; the data is classroom-sized.

use tracing::{debug, warn};

use crate::error::{Result, UniversityError};
use crate::models::handle::push_unique;
use crate::models::{
    CourseRef, DepartmentRef, Enrollment, EnrollmentRef, FacultyRef, GroupRef, LessonRef, Person,
    ProfessorRef, RoomRef, ScheduleRef, StudentRef,
};
use crate::University;

impl University {
    // ---- strict ----

    /// Assigns `course` to `professor` and makes them the course's professor.
    ///
    /// # Errors
    /// [`UniversityError::ProfessorAlreadyAssigned`] if the professor already
    /// teaches the course.
    pub fn assign_course(&mut self, professor: ProfessorRef, course: CourseRef) -> Result<()> {
        if self.professor(professor).teaches(course) {
            let err = UniversityError::ProfessorAlreadyAssigned {
                employee_id: self.professor(professor).employee_id.clone(),
                course_code: self.course(course).course_code.clone(),
            };
            warn!(%err, "course assignment rejected");
            return Err(err);
        }
        self.professors[professor.0].courses.push(course);
        self.set_course_professor(course, professor);
        Ok(())
    }

    /// Enrolls `student` in `course`.
    ///
    /// Creates a new ungraded [`Enrollment`] timestamped now, appends it to
    /// the student's list, and adds the student to the course (deduplicated).
    ///
    /// # Errors
    /// [`UniversityError::DuplicateEnrollment`] if the student already holds
    /// an enrollment for this course.
    pub fn enroll_in_course(
        &mut self,
        student: StudentRef,
        course: CourseRef,
    ) -> Result<EnrollmentRef> {
        if self.enrollment_for(student, course).is_some() {
            let err = UniversityError::DuplicateEnrollment {
                student_id: self.student(student).student_id.clone(),
                course_code: self.course(course).course_code.clone(),
            };
            warn!(%err, "enrollment rejected");
            return Err(err);
        }
        let enrollment = self.insert_enrollment(Enrollment::new(student, course));
        self.course_add_student(course, student);
        debug!(
            student = %self.student(student).full_name(),
            course = %self.course(course).title,
            "student enrolled"
        );
        Ok(enrollment)
    }

    /// Adds `student` to `group` on both sides.
    ///
    /// # Errors
    /// [`UniversityError::GroupAlreadyJoined`] if the student already lists
    /// the group.
    pub fn join_group(&mut self, student: StudentRef, group: GroupRef) -> Result<()> {
        if self.student(student).is_member_of(group) {
            let err = UniversityError::GroupAlreadyJoined {
                student_id: self.student(student).student_id.clone(),
                group_name: self.group(group).group_name.clone(),
            };
            warn!(%err, "group join rejected");
            return Err(err);
        }
        self.students[student.0].groups.push(group);
        push_unique(&mut self.groups[group.0].students, student);
        debug!(
            student = %self.student(student).full_name(),
            group = %self.group(group).group_name,
            "student joined group"
        );
        Ok(())
    }

    /// Sets the grade of an enrollment.
    ///
    /// # Errors
    /// [`UniversityError::InvalidGrade`] outside `0..=54`; the previous grade
    /// is kept.
    pub fn set_grade(&mut self, enrollment: EnrollmentRef, grade: i32) -> Result<()> {
        if let Err(err) = self.enrollments[enrollment.0].set_grade(grade) {
            warn!(%err, %enrollment, "grade rejected");
            return Err(err);
        }
        debug!(%enrollment, grade, "grade set");
        Ok(())
    }

    // ---- permissive ----

    /// Makes `professor` the course's professor, replacing any previous one.
    ///
    /// Replacing a different professor logs a warning but succeeds. This
    /// does not touch the professor's course list.
    pub fn set_course_professor(&mut self, course: CourseRef, professor: ProfessorRef) {
        if let Some(prev) = self.course(course).professor {
            if prev != professor {
                warn!(
                    course = %self.course(course).title,
                    previous = %self.professor(prev).full_name(),
                    replacement = %self.professor(professor).full_name(),
                    "course professor replaced"
                );
            }
        }
        self.courses[course.0].professor = Some(professor);
    }

    /// Adds `student` to the course's student list. Duplicates are ignored
    /// and no enrollment is created.
    pub fn course_add_student(&mut self, course: CourseRef, student: StudentRef) -> bool {
        push_unique(&mut self.courses[course.0].students, student)
    }

    /// Adds `student` to `group` on both sides. Duplicates are ignored.
    pub fn group_add_student(&mut self, group: GroupRef, student: StudentRef) -> bool {
        let added = push_unique(&mut self.groups[group.0].students, student);
        push_unique(&mut self.students[student.0].groups, group);
        added
    }

    /// Adds `lesson` to the professor's lessons and sets the lesson's
    /// professor. Duplicates are ignored.
    pub fn professor_add_lesson(&mut self, professor: ProfessorRef, lesson: LessonRef) -> bool {
        let added = push_unique(&mut self.professors[professor.0].lessons, lesson);
        if added {
            self.lessons[lesson.0].professor = Some(professor);
        }
        added
    }

    /// Sets the lesson's professor and adds the lesson to their list.
    pub fn set_lesson_professor(&mut self, lesson: LessonRef, professor: ProfessorRef) {
        self.lessons[lesson.0].professor = Some(professor);
        push_unique(&mut self.professors[professor.0].lessons, lesson);
    }

    /// Adds `lesson` to the room and sets the lesson's room. Duplicates are
    /// ignored. Room capacity is not checked.
    pub fn room_add_lesson(&mut self, room: RoomRef, lesson: LessonRef) -> bool {
        let added = push_unique(&mut self.rooms[room.0].lessons, lesson);
        if added {
            self.lessons[lesson.0].room = Some(room);
            let title = self
                .lesson(lesson)
                .course
                .map_or("N/A", |c| self.course(c).title.as_str());
            debug!(course = %title, room = %self.room(room).room_number, "lesson added to room");
        }
        added
    }

    /// Sets the lesson's room and adds the lesson to the room's list.
    pub fn set_lesson_room(&mut self, lesson: LessonRef, room: RoomRef) {
        self.lessons[lesson.0].room = Some(room);
        push_unique(&mut self.rooms[room.0].lessons, lesson);
    }

    /// Sets the lesson's course. One-way: courses do not list lessons.
    pub fn set_lesson_course(&mut self, lesson: LessonRef, course: CourseRef) {
        self.lessons[lesson.0].course = Some(course);
    }

    /// Puts `group` on `schedule` and registers it in the schedule's groups.
    pub fn set_schedule(&mut self, group: GroupRef, schedule: ScheduleRef) {
        self.groups[group.0].schedule = Some(schedule);
        push_unique(&mut self.schedules[schedule.0].groups, group);
    }

    /// Registers `group` in the schedule and points the group at it.
    /// Duplicates are ignored.
    pub fn schedule_add_group(&mut self, schedule: ScheduleRef, group: GroupRef) -> bool {
        let added = push_unique(&mut self.schedules[schedule.0].groups, group);
        if added {
            self.groups[group.0].schedule = Some(schedule);
        }
        added
    }

    /// Registers `professor` in the schedule. Duplicates are ignored.
    pub fn schedule_add_professor(
        &mut self,
        schedule: ScheduleRef,
        professor: ProfessorRef,
    ) -> bool {
        self.schedules[schedule.0].add_professor(professor)
    }

    /// Registers `room` in the schedule. Duplicates are ignored.
    pub fn schedule_add_room(&mut self, schedule: ScheduleRef, room: RoomRef) -> bool {
        self.schedules[schedule.0].add_room(room)
    }

    /// Registers `lesson` in the schedule. Duplicates are ignored.
    pub fn schedule_add_lesson(&mut self, schedule: ScheduleRef, lesson: LessonRef) -> bool {
        self.schedules[schedule.0].add_lesson(lesson)
    }

    /// Adds `faculty` to the department and sets its back-reference.
    /// Duplicates are ignored.
    pub fn department_add_faculty(
        &mut self,
        department: DepartmentRef,
        faculty: FacultyRef,
    ) -> bool {
        let added = push_unique(&mut self.departments[department.0].faculties, faculty);
        if added {
            self.faculties[faculty.0].department = Some(department);
        }
        added
    }

    /// Adds `course` to the faculty and sets its back-reference.
    /// Duplicates are ignored.
    pub fn faculty_add_course(&mut self, faculty: FacultyRef, course: CourseRef) -> bool {
        let added = push_unique(&mut self.faculties[faculty.0].courses, course);
        if added {
            self.courses[course.0].faculty = Some(faculty);
        }
        added
    }
}
