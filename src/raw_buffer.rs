use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

/// Owned, uninitialized storage for `capacity` values of `T`.
///
/// The buffer never reads, writes or drops elements. Tracking which slots
/// hold live values is the job of the owning `Vector`. Dropping a
/// `RawBuffer` only releases the allocation.
///
/// Zero-sized types never allocate; their capacity is still tracked so that
/// the growth sequence is the same for every `T`.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer is uniquely owned, exactly like the allocation of a `Vec<T>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access never hands out anything but `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// Creates a buffer without allocating.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the byte size does not fit in `isize`.
    /// Allocator failures are routed to [`handle_alloc_error`].
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            };
        }

        let layout = Self::layout(capacity);
        // SAFETY: layout has a non-zero size, checked above.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout)
        };

        Self {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn is_allocated(&self) -> bool {
        self.capacity != 0 && mem::size_of::<T>() != 0
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // SAFETY: ptr was returned by `alloc` with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.capacity)) }
        }
    }
}
